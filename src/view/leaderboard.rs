use maud::{Markup, html};

use crate::controller::leaderboard::LeaderboardData;
use crate::model::{LeaderboardEntry, ScoringSystem};

fn result_header(system: ScoringSystem) -> &'static str {
    match system {
        ScoringSystem::Stableford => "POINTS",
        _ => "NET",
    }
}

fn result_value(entry: &LeaderboardEntry) -> i32 {
    match entry.result.system() {
        ScoringSystem::Stableford => entry.points(),
        _ => entry.net_score(),
    }
}

fn thru_display(thru: usize) -> String {
    match thru {
        0 => "-".to_string(),
        18.. => "F".to_string(),
        n => n.to_string(),
    }
}

#[must_use]
pub fn render_leaderboard_template(data: &LeaderboardData) -> Markup {
    html! {
        h3 { (data.tournament.name) " (" (data.system) ")" }

        @if data.entries.is_empty() {
            p class="empty" { "No scores yet." }
        } @else {
            table class="styled-table" {
                thead {
                    tr {
                        th { "PLACE" }
                        th { "PLAYER" }
                        th { "TEAM" }
                        th { "THRU" }
                        th { "GROSS" }
                        th { "HCP" }
                        th { (result_header(data.system)) }
                    }
                }
                tbody {
                    @for entry in &data.entries {
                        tr {
                            td { (entry.rank) }
                            td { (entry.player.name) }
                            td { (entry.player.team.as_deref().unwrap_or("")) }
                            td { (thru_display(entry.thru)) }
                            td { (entry.gross_score) }
                            td { (entry.handicap) }
                            td { (result_value(entry)) }
                        }
                    }
                }
            }
        }

        p class="refresh" { "Last updated " (data.generated_at) }
    }
}
