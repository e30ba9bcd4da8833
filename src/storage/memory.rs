use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::seed::SeedData;
use super::{Storage, StorageError};
use crate::model::{CoursePars, Player, RawScore, Tournament};

/// Row store held in memory, loaded from a seed document.
#[derive(Clone, Default)]
pub struct MemoryStore {
    data: Arc<RwLock<SeedData>>,
}

impl MemoryStore {
    /// # Errors
    ///
    /// Will return `Err` if the seed fails validation
    pub fn from_seed(seed: SeedData) -> Result<Self, StorageError> {
        seed.validate()?;
        Ok(Self {
            data: Arc::new(RwLock::new(seed)),
        })
    }
}

#[async_trait]
impl Storage for MemoryStore {
    async fn get_tournament(&self, tournament_id: &str) -> Result<Tournament, StorageError> {
        let data = self.data.read().await;
        data.tournaments
            .iter()
            .find(|t| t.id == tournament_id)
            .map(|t| t.tournament())
            .ok_or_else(|| StorageError::NotFound(format!("tournament '{tournament_id}'")))
    }

    async fn fetch_scores(&self, tournament_id: &str) -> Result<Vec<RawScore>, StorageError> {
        let data = self.data.read().await;
        Ok(data
            .scores
            .iter()
            .filter(|s| s.tournament_id == tournament_id)
            .cloned()
            .collect())
    }

    async fn fetch_course_pars(&self, course_id: &str) -> Result<CoursePars, StorageError> {
        let data = self.data.read().await;
        data.courses
            .iter()
            .find(|c| c.id == course_id)
            .map(|c| CoursePars::from(c.pars.as_slice()))
            .ok_or_else(|| StorageError::NotFound(format!("course '{course_id}'")))
    }

    async fn fetch_players(&self) -> Result<Vec<Player>, StorageError> {
        Ok(self.data.read().await.players.clone())
    }

    async fn fetch_handicap_overrides(
        &self,
        tournament_id: &str,
    ) -> Result<HashMap<String, i32>, StorageError> {
        let data = self.data.read().await;
        Ok(data
            .tournaments
            .iter()
            .find(|t| t.id == tournament_id)
            .map(|t| t.handicaps.clone())
            .unwrap_or_default())
    }
}
