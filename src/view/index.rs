use maud::{Markup, html};

use crate::HTMX_PATH;
use crate::storage::Storage;

pub const DEFAULT_INDEX_TITLE: &str = "Leaderboard";

/// Tournament name for the page title, or the default when the id is unknown.
pub async fn resolve_index_title_or_default(storage: &dyn Storage, tournament_id: &str) -> String {
    match storage.get_tournament(tournament_id.trim()).await {
        Ok(tournament) => tournament.name,
        Err(e) => {
            log::warn!("No title for tournament '{tournament_id}': {e}");
            DEFAULT_INDEX_TITLE.to_string()
        }
    }
}

/// Page shell that polls the leaderboard fragment.
#[must_use]
pub fn render_index_template(title: &str, tournament_id: &str) -> Markup {
    let fragment_url = format!(
        "leaderboard?tournament={}",
        urlencoding::encode(tournament_id)
    );
    html! {
        (maud::DOCTYPE)
        head {
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/styles.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { (title) }
            div id="leaderboard" hx-get=(fragment_url) hx-trigger="load, every 30s" {
                img alt="Result loading..." class="htmx-indicator" width="150" src="https://htmx.org//img/bars.svg" {}
            }
        }
    }
}
