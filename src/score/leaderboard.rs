use std::collections::HashMap;

use crate::model::{
    CoursePars, LeaderboardEntry, Player, RawScore, ScoreResult, ScoringSystem,
};

use super::aggregate::{gross_total, holes_thru};
use super::handicap::{callaway, system36};
use super::stableford::stableford_points;

/// Build the ranked board for one tournament.
///
/// Players without a single score record are left off. A hole-0 sentinel row
/// is enough to get on the board with a gross of 0. Entries are stable-sorted
/// (points descending for Stableford, net ascending otherwise) and ranked
/// `1..=n` in that order; equal scores still get distinct ranks.
#[must_use]
pub fn generate_leaderboard(
    players: &[Player],
    all_scores: &[RawScore],
    pars: &CoursePars,
    scoring_system: ScoringSystem,
    player_handicaps: Option<&HashMap<String, i32>>,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = players
        .iter()
        .filter_map(|player| {
            let scores: Vec<RawScore> = all_scores
                .iter()
                .filter(|s| s.player_id == player.id)
                .cloned()
                .collect();
            if scores.is_empty() {
                return None;
            }
            Some(score_player(player, &scores, pars, scoring_system, player_handicaps))
        })
        .collect();

    if scoring_system.ranks_descending() {
        entries.sort_by(|a, b| b.points().cmp(&a.points()));
    } else {
        entries.sort_by_key(LeaderboardEntry::net_score);
    }

    for (i, entry) in entries.iter_mut().enumerate() {
        entry.rank = i + 1;
    }

    entries
}

fn score_player(
    player: &Player,
    scores: &[RawScore],
    pars: &CoursePars,
    scoring_system: ScoringSystem,
    player_handicaps: Option<&HashMap<String, i32>>,
) -> LeaderboardEntry {
    let gross_score = gross_total(scores);

    let (handicap, result) = match scoring_system {
        ScoringSystem::Stroke => {
            let handicap = player_handicaps
                .and_then(|overrides| overrides.get(&player.id))
                .copied()
                .unwrap_or(player.handicap);
            (
                handicap,
                ScoreResult::Stroke {
                    net: gross_score.saturating_sub(handicap),
                },
            )
        }
        ScoringSystem::Stableford => (
            player.handicap,
            ScoreResult::Stableford {
                points: stableford_points(scores, pars),
            },
        ),
        ScoringSystem::System36 => {
            let derived = system36(gross_score);
            (derived.handicap, ScoreResult::System36 { net: derived.net })
        }
        ScoringSystem::Callaway => {
            let derived = callaway(scores, pars);
            (derived.handicap, ScoreResult::Callaway { net: derived.net })
        }
    };

    LeaderboardEntry {
        player: player.clone(),
        gross_score,
        handicap,
        result,
        rank: 0,
        thru: holes_thru(scores),
    }
}
