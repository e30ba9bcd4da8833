use serde::{Deserialize, Serialize};

use super::player::Player;
use super::tournament::ScoringSystem;

/// What a player's round is worth under the active scoring system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreResult {
    Stroke { net: i32 },
    Stableford { points: i32 },
    System36 { net: i32 },
    Callaway { net: i32 },
}

impl ScoreResult {
    #[must_use]
    pub fn system(&self) -> ScoringSystem {
        match self {
            ScoreResult::Stroke { .. } => ScoringSystem::Stroke,
            ScoreResult::Stableford { .. } => ScoringSystem::Stableford,
            ScoreResult::System36 { .. } => ScoringSystem::System36,
            ScoreResult::Callaway { .. } => ScoringSystem::Callaway,
        }
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(into = "LeaderboardRow")]
pub struct LeaderboardEntry {
    pub player: Player,
    pub gross_score: i32,
    pub handicap: i32,
    pub result: ScoreResult,
    pub rank: usize,
    /// Number of hole entries between 1 and 18 the player has on record.
    pub thru: usize,
}

impl LeaderboardEntry {
    /// The value the board sorts on. For Stableford this is the points total.
    #[must_use]
    pub fn net_score(&self) -> i32 {
        match self.result {
            ScoreResult::Stroke { net }
            | ScoreResult::System36 { net }
            | ScoreResult::Callaway { net } => net,
            ScoreResult::Stableford { points } => points,
        }
    }

    #[must_use]
    pub fn points(&self) -> i32 {
        match self.result {
            ScoreResult::Stableford { points } => points,
            _ => 0,
        }
    }
}

/// Flat wire shape of a [`LeaderboardEntry`].
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub player: Player,
    pub gross_score: i32,
    pub net_score: i32,
    pub handicap: i32,
    pub points: i32,
    pub rank: usize,
    pub thru: usize,
    pub system: ScoringSystem,
}

impl From<LeaderboardEntry> for LeaderboardRow {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            gross_score: entry.gross_score,
            net_score: entry.net_score(),
            handicap: entry.handicap,
            points: entry.points(),
            rank: entry.rank,
            thru: entry.thru,
            system: entry.result.system(),
            player: entry.player,
        }
    }
}
