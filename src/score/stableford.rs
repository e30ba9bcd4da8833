use crate::model::{CoursePars, HOLES_PER_ROUND, RawScore};

use super::aggregate::score_for_hole;

const BEST_DIFF: i32 = -3;
const WORST_DIFF: i32 = 2;

/// Points indexed by `diff - BEST_DIFF`: albatross, eagle, birdie, par, bogey,
/// double bogey or worse.
const STABLEFORD_POINTS: [i32; 6] = [5, 4, 3, 2, 1, 0];

/// Stableford points for a single hole given strokes and par.
#[must_use]
pub fn stableford_points_for_hole(strokes: i32, par: i32) -> i32 {
    let diff = (strokes - par).clamp(BEST_DIFF, WORST_DIFF);
    let idx = usize::try_from(diff - BEST_DIFF).unwrap_or(0);
    STABLEFORD_POINTS[idx]
}

/// Stableford total for one player's round. Unplayed holes score nothing.
#[must_use]
pub fn stableford_points(scores: &[RawScore], pars: &CoursePars) -> i32 {
    (1..=HOLES_PER_ROUND)
        .filter_map(|hole| {
            score_for_hole(scores, hole)
                .map(|strokes| stableford_points_for_hole(strokes, pars.par_for_hole(hole)))
        })
        .sum()
}
