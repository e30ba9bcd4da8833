use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::ops::RangeInclusive;
use std::path::Path;

use super::StorageError;
use crate::model::{Course, HOLES_PER_ROUND, Player, RawScore, ScoringSystem, Tournament};

/// Accepted par for a single hole in a seed document.
pub const SEED_PAR_RANGE: RangeInclusive<i32> = 1..=10;
/// Accepted stroke count for a single score row; 0 is the unplayed marker.
pub const SEED_STROKES_RANGE: RangeInclusive<i32> = 0..=99;

/// A tournament as it appears in a seed document, with its optional
/// handicap overrides inline.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SeedTournament {
    pub id: String,
    pub name: String,
    pub course_id: String,
    pub scoring_system: ScoringSystem,
    #[serde(default)]
    pub handicaps: HashMap<String, i32>,
}

impl SeedTournament {
    #[must_use]
    pub fn tournament(&self) -> Tournament {
        Tournament {
            id: self.id.clone(),
            name: self.name.clone(),
            course_id: self.course_id.clone(),
            scoring_system: self.scoring_system,
        }
    }
}

/// format we expect is this:
/// { "courses": [{"id": "c1", "name": "...", "pars": [<18 ints>]}],
///   "players": [{"id": "p1", "name": "...", "team": "...", "handicap": <int>}],
///   "tournaments": [{"id": "t1", "name": "...", "course_id": "c1",
///                    "scoring_system": "stroke", "handicaps": {"p1": <int>}}],
///   "scores": [{"tournament_id": "t1", "player_id": "p1", "hole": <int>, "strokes": <int>}] }
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedData {
    #[serde(default)]
    pub courses: Vec<Course>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub tournaments: Vec<SeedTournament>,
    #[serde(default)]
    pub scores: Vec<RawScore>,
}

impl SeedData {
    /// # Errors
    ///
    /// Will return `Err` if the json does not match the seed format or fails validation
    pub fn from_json_str(json: &str) -> Result<Self, StorageError> {
        let seed: SeedData = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// # Errors
    ///
    /// Will return `Err` if the file is unreadable, not valid json, or fails validation
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Check the references between sections and the shape of each course.
    ///
    /// # Errors
    ///
    /// Will return `Err` naming the first problem found
    pub fn validate(&self) -> Result<(), StorageError> {
        let holes = usize::try_from(HOLES_PER_ROUND).unwrap_or(18);
        for course in &self.courses {
            if course.pars.len() != holes {
                return Err(StorageError::Invalid(format!(
                    "course '{}' has {} pars, expected {holes}",
                    course.id,
                    course.pars.len()
                )));
            }
            if let Some((idx, par)) = course
                .pars
                .iter()
                .enumerate()
                .find(|(_, par)| !SEED_PAR_RANGE.contains(par))
            {
                return Err(StorageError::Invalid(format!(
                    "course '{}' hole {} has par {par}, expected {}..={}",
                    course.id,
                    idx + 1,
                    SEED_PAR_RANGE.start(),
                    SEED_PAR_RANGE.end()
                )));
            }
        }

        let course_ids: HashSet<&str> = self.courses.iter().map(|c| c.id.as_str()).collect();
        for tournament in &self.tournaments {
            if !course_ids.contains(tournament.course_id.as_str()) {
                return Err(StorageError::Invalid(format!(
                    "tournament '{}' references unknown course '{}'",
                    tournament.id, tournament.course_id
                )));
            }
        }

        let tournament_ids: HashSet<&str> =
            self.tournaments.iter().map(|t| t.id.as_str()).collect();
        for score in &self.scores {
            if !tournament_ids.contains(score.tournament_id.as_str()) {
                return Err(StorageError::Invalid(format!(
                    "score for player '{}' references unknown tournament '{}'",
                    score.player_id, score.tournament_id
                )));
            }
            if !SEED_STROKES_RANGE.contains(&score.strokes) {
                return Err(StorageError::Invalid(format!(
                    "score for player '{}' on hole {} has {} strokes, expected {}..={}",
                    score.player_id,
                    score.hole,
                    score.strokes,
                    SEED_STROKES_RANGE.start(),
                    SEED_STROKES_RANGE.end()
                )));
            }
        }

        Ok(())
    }
}
