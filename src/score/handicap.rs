use serde::Serialize;

use crate::model::{CoursePars, RawScore};

use super::aggregate::{gross_total, score_for_hole};

const SYSTEM36_BASE: i32 = 36;
const SYSTEM36_FACTOR: f64 = 0.8;

/// Holes 17 and 18 are never eligible for a Callaway deduction.
pub const CALLAWAY_LAST_ELIGIBLE_HOLE: i32 = 16;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct HandicapResult {
    pub handicap: i32,
    pub net: i32,
}

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallawayResult {
    pub handicap: i32,
    pub net: i32,
    pub gross_score: i32,
}

/// One row of the Callaway deduction table. Holes are counted in halves so a
/// row can ask for "one and a half" worst holes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CallawayBracket {
    pub max_gross: i32,
    pub half_holes: u32,
    pub adjustment: i32,
}

const CALLAWAY_TABLE: [CallawayBracket; 8] = [
    CallawayBracket { max_gross: 75, half_holes: 0, adjustment: 0 },
    CallawayBracket { max_gross: 80, half_holes: 2, adjustment: 0 },
    CallawayBracket { max_gross: 85, half_holes: 4, adjustment: 0 },
    CallawayBracket { max_gross: 90, half_holes: 6, adjustment: 1 },
    CallawayBracket { max_gross: 95, half_holes: 8, adjustment: 1 },
    CallawayBracket { max_gross: 100, half_holes: 10, adjustment: 2 },
    CallawayBracket { max_gross: 105, half_holes: 12, adjustment: 2 },
    CallawayBracket { max_gross: i32::MAX, half_holes: 14, adjustment: 3 },
];

/// 36 System: the handicap is 80% of the strokes over 36, never negative.
#[must_use]
pub fn system36(gross_score: i32) -> HandicapResult {
    let over = f64::from(gross_score.saturating_sub(SYSTEM36_BASE));
    #[allow(clippy::cast_possible_truncation)]
    let raw = (over * SYSTEM36_FACTOR).round() as i32;
    let handicap = raw.max(0);
    HandicapResult {
        handicap,
        net: gross_score - handicap,
    }
}

#[must_use]
pub fn callaway_bracket(gross_score: i32) -> CallawayBracket {
    CALLAWAY_TABLE
        .iter()
        .copied()
        .find(|bracket| gross_score <= bracket.max_gross)
        .unwrap_or(CALLAWAY_TABLE[CALLAWAY_TABLE.len() - 1])
}

/// Sum of the worst holes. `worst_first` must already be sorted descending.
/// A trailing half hole adds half of the next worst score, rounded down.
#[must_use]
pub fn callaway_deduction(worst_first: &[i32], half_holes: u32) -> i32 {
    let whole = (half_holes / 2) as usize;
    let mut deduction = worst_first
        .iter()
        .take(whole)
        .fold(0, |total: i32, strokes| total.saturating_add(*strokes));
    if half_holes % 2 == 1 {
        if let Some(next) = worst_first.get(whole) {
            deduction = deduction.saturating_add(next.div_euclid(2));
        }
    }
    deduction
}

/// Callaway System net score for one player's round.
#[must_use]
pub fn callaway(scores: &[RawScore], pars: &CoursePars) -> CallawayResult {
    let gross_score = gross_total(scores);
    let bracket = callaway_bracket(gross_score);

    // a blow-up hole counts for at most double par
    let mut eligible: Vec<i32> = (1..=CALLAWAY_LAST_ELIGIBLE_HOLE)
        .filter_map(|hole| {
            score_for_hole(scores, hole)
                .map(|strokes| strokes.min(pars.par_for_hole(hole).saturating_mul(2)))
        })
        .collect();
    eligible.sort_unstable_by(|a, b| b.cmp(a));

    let deduction = callaway_deduction(&eligible, bracket.half_holes);
    let handicap = deduction.saturating_sub(bracket.adjustment).max(0);

    CallawayResult {
        handicap,
        net: gross_score - handicap,
        gross_score,
    }
}
