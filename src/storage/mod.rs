pub mod memory;
pub mod seed;
pub mod sqlite;

pub use memory::MemoryStore;
pub use seed::SeedData;
pub use sqlite::SqliteStore;

use crate::model::{CoursePars, Player, RawScore, Tournament};
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("db error: {0}")]
    Db(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid data: {0}")]
    Invalid(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Db(err.to_string())
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Db(err.to_string())
    }
}

/// Read side of the tournament row store. The scoring engine only ever sees
/// what these calls return.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_tournament(&self, tournament_id: &str) -> Result<Tournament, StorageError>;
    async fn fetch_scores(&self, tournament_id: &str) -> Result<Vec<RawScore>, StorageError>;
    async fn fetch_course_pars(&self, course_id: &str) -> Result<CoursePars, StorageError>;
    async fn fetch_players(&self) -> Result<Vec<Player>, StorageError>;
    /// Per-tournament handicaps that take precedence over a player's default
    /// in stroke play.
    async fn fetch_handicap_overrides(
        &self,
        tournament_id: &str,
    ) -> Result<HashMap<String, i32>, StorageError>;
}
