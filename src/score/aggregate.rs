use crate::model::RawScore;

/// Sum of strokes over real hole entries. Sentinel rows, holes outside 1..=18
/// and non-positive stroke counts are left out.
#[must_use]
pub fn gross_total(scores: &[RawScore]) -> i32 {
    scores
        .iter()
        .filter(|s| s.counts_toward_total())
        .fold(0, |total: i32, s| total.saturating_add(s.strokes))
}

/// Number of entries recorded for holes 1..=18. The stroke value is ignored.
#[must_use]
pub fn holes_thru(scores: &[RawScore]) -> usize {
    scores.iter().filter(|s| s.is_on_course()).count()
}

/// First positive stroke count recorded for `hole`, if any.
#[must_use]
pub fn score_for_hole(scores: &[RawScore], hole: i32) -> Option<i32> {
    scores
        .iter()
        .find(|s| s.hole == hole)
        .map(|s| s.strokes)
        .filter(|strokes| *strokes > 0)
}
