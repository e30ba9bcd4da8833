use actix_web::web::{self, Data};
use actix_web::{HttpResponse, Responder};
use std::collections::HashMap;

use crate::storage::Storage;
use crate::view::index::{render_index_template, resolve_index_title_or_default};

pub async fn index(
    query: web::Query<HashMap<String, String>>,
    storage: Data<dyn Storage>,
) -> impl Responder {
    let tournament_id = query
        .get("tournament")
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let title = resolve_index_title_or_default(storage.get_ref(), &tournament_id).await;

    let markup = render_index_template(&title, &tournament_id);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
