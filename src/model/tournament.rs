use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Selects how a leaderboard computes net results and orders its entries.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScoringSystem {
    #[serde(rename = "stroke")]
    Stroke,
    #[serde(rename = "stableford")]
    Stableford,
    #[serde(rename = "36system", alias = "system36")]
    System36,
    #[serde(rename = "callaway")]
    Callaway,
}

impl ScoringSystem {
    pub const ALL: [ScoringSystem; 4] = [
        ScoringSystem::Stroke,
        ScoringSystem::Stableford,
        ScoringSystem::System36,
        ScoringSystem::Callaway,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ScoringSystem::Stroke => "stroke",
            ScoringSystem::Stableford => "stableford",
            ScoringSystem::System36 => "36system",
            ScoringSystem::Callaway => "callaway",
        }
    }

    /// Stableford ranks by points, highest first. Everything else ranks by
    /// net score, lowest first.
    #[must_use]
    pub fn ranks_descending(self) -> bool {
        matches!(self, ScoringSystem::Stableford)
    }
}

impl fmt::Display for ScoringSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoringSystem {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stroke" => Ok(ScoringSystem::Stroke),
            "stableford" => Ok(ScoringSystem::Stableford),
            "36system" | "system36" => Ok(ScoringSystem::System36),
            "callaway" => Ok(ScoringSystem::Callaway),
            other => Err(CoreError::Parse(format!(
                "unknown scoring system '{other}', expected one of stroke, stableford, 36system, callaway"
            ))),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Course {
    pub id: String,
    pub name: String,
    pub pars: Vec<i32>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Tournament {
    pub id: String,
    pub name: String,
    pub course_id: String,
    pub scoring_system: ScoringSystem,
}
