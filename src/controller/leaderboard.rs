use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::CoreError;
use crate::model::{LeaderboardEntry, ScoringSystem, Tournament};
use crate::score::generate_leaderboard;
use crate::storage::Storage;
use crate::view::leaderboard::render_leaderboard_template;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRequest {
    pub tournament_id: String,
    /// Overrides the tournament's configured system when present.
    pub system: Option<ScoringSystem>,
    pub want_json: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardData {
    pub tournament: Tournament,
    pub system: ScoringSystem,
    pub entries: Vec<LeaderboardEntry>,
    pub generated_at: String,
}

/// Parse query parameters into a leaderboard request.
///
/// # Errors
/// Returns an error if the tournament is missing, the system is unknown or
/// the json flag is not a boolean.
pub fn parse_leaderboard_request<S: BuildHasher>(
    query: &HashMap<String, String, S>,
) -> Result<LeaderboardRequest, CoreError> {
    let tournament_id = query
        .get("tournament")
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::BadRequest("tournament parameter is required".into()))?
        .to_string();
    let system = match query.get("system").map(|s| s.trim()) {
        None | Some("") => None,
        Some(s) => Some(
            s.parse::<ScoringSystem>()
                .map_err(|e| CoreError::BadRequest(e.to_string()))?,
        ),
    };
    let want_json = match query.get("json").map(|s| s.trim().to_ascii_lowercase()) {
        None => false,
        Some(flag) => match flag.as_str() {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" | "" => false,
            other => {
                return Err(CoreError::BadRequest(format!(
                    "json must be 1/true/yes or 0/false/no, got '{other}'"
                )));
            }
        },
    };
    Ok(LeaderboardRequest {
        tournament_id,
        system,
        want_json,
    })
}

/// Fetch everything one tournament needs from storage and rank the field.
///
/// # Errors
/// Returns an error if any storage call fails.
pub async fn load_leaderboard(
    storage: &dyn Storage,
    tournament_id: &str,
    system: Option<ScoringSystem>,
) -> Result<LeaderboardData, CoreError> {
    let tournament = storage.get_tournament(tournament_id).await?;
    let system = system.unwrap_or(tournament.scoring_system);
    let pars = storage.fetch_course_pars(&tournament.course_id).await?;
    let players = storage.fetch_players().await?;
    let scores = storage.fetch_scores(tournament_id).await?;
    let overrides = storage.fetch_handicap_overrides(tournament_id).await?;

    let entries = generate_leaderboard(&players, &scores, &pars, system, Some(&overrides));
    log::debug!(
        "Ranked {} of {} players for tournament {tournament_id} ({system})",
        entries.len(),
        players.len()
    );

    Ok(LeaderboardData {
        tournament,
        system,
        entries,
        generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    })
}

#[must_use]
pub fn error_response(err: &CoreError) -> HttpResponse {
    match err {
        CoreError::BadRequest(_) | CoreError::Parse(_) => {
            log::warn!("Rejected leaderboard request: {err}");
            HttpResponse::BadRequest().json(json!({"error": err.to_string()}))
        }
        _ if err.is_not_found() => {
            HttpResponse::NotFound().json(json!({"error": err.to_string()}))
        }
        _ => {
            log::error!("Leaderboard failed: {err}");
            HttpResponse::InternalServerError().json(json!({"error": err.to_string()}))
        }
    }
}

pub async fn leaderboard(
    query: web::Query<HashMap<String, String>>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let request = match parse_leaderboard_request(&query.into_inner()) {
        Ok(request) => request,
        Err(e) => return error_response(&e),
    };

    match load_leaderboard(storage.get_ref(), &request.tournament_id, request.system).await {
        Ok(data) => {
            if request.want_json {
                HttpResponse::Ok().json(&data.entries)
            } else {
                let markup = render_leaderboard_template(&data);
                HttpResponse::Ok()
                    .content_type("text/html")
                    .body(markup.into_string())
            }
        }
        Err(e) => error_response(&e),
    }
}
