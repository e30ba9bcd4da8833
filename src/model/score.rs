use serde::{Deserialize, Serialize};

pub const HOLES_PER_ROUND: i32 = 18;
pub const DEFAULT_PAR: i32 = 4;

/// One recorded stroke count for one player on one hole of one tournament.
///
/// Hole 0 is the "registered, no score yet" sentinel; it never counts toward
/// a scoring aggregate.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RawScore {
    pub tournament_id: String,
    pub player_id: String,
    pub hole: i32,
    pub strokes: i32,
    #[serde(default)]
    pub par: i32,
}

impl RawScore {
    #[must_use]
    pub fn new(
        tournament_id: impl Into<String>,
        player_id: impl Into<String>,
        hole: i32,
        strokes: i32,
    ) -> Self {
        Self {
            tournament_id: tournament_id.into(),
            player_id: player_id.into(),
            hole,
            strokes,
            par: 0,
        }
    }

    /// True for holes 1 through 18, whatever the stroke count.
    #[must_use]
    pub fn is_on_course(&self) -> bool {
        (1..=HOLES_PER_ROUND).contains(&self.hole)
    }

    /// True when the record is a real stroke count that belongs in a total.
    #[must_use]
    pub fn counts_toward_total(&self) -> bool {
        self.is_on_course() && self.strokes > 0
    }
}

/// Par for each hole of a course, index 0 being hole 1.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "Vec<i32>", into = "Vec<i32>")]
pub struct CoursePars(Vec<i32>);

impl CoursePars {
    /// Par for `hole` (1-based). Missing or non-positive entries read as par 4.
    #[must_use]
    pub fn par_for_hole(&self, hole: i32) -> i32 {
        hole.checked_sub(1)
            .and_then(|idx| usize::try_from(idx).ok())
            .and_then(|idx| self.0.get(idx))
            .copied()
            .filter(|par| *par > 0)
            .unwrap_or(DEFAULT_PAR)
    }

    #[must_use]
    pub fn total(&self) -> i32 {
        (1..=HOLES_PER_ROUND)
            .fold(0, |total: i32, hole| total.saturating_add(self.par_for_hole(hole)))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }
}

impl From<Vec<i32>> for CoursePars {
    fn from(mut pars: Vec<i32>) -> Self {
        pars.truncate(HOLES_PER_ROUND as usize);
        Self(pars)
    }
}

impl From<&[i32]> for CoursePars {
    fn from(pars: &[i32]) -> Self {
        Self::from(pars.to_vec())
    }
}

impl From<CoursePars> for Vec<i32> {
    fn from(pars: CoursePars) -> Self {
        pars.0
    }
}
