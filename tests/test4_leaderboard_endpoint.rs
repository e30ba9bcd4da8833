mod common;

use actix_web::web::Data;
use actix_web::{App, http::StatusCode, test, web};
use serde_json::Value;
use std::sync::Arc;

use golf_leaderboard::controller::{index::index, leaderboard::leaderboard};
use golf_leaderboard::storage::{MemoryStore, Storage};

fn storage() -> Arc<dyn Storage> {
    Arc::new(MemoryStore::from_seed(common::seed()).expect("seed loads"))
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(Data::from(storage()))
                .route("/", web::get().to(index))
                .route("/leaderboard", web::get().to(leaderboard)),
        )
        .await
    };
}

fn player_names(body: &Value) -> Vec<String> {
    body.as_array()
        .expect("response is a json array")
        .iter()
        .map(|e| e["player"]["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[actix_web::test]
async fn test_leaderboard_json_per_system() {
    let app = app!();

    let cases = [
        ("stroke", vec!["Eve", "Carol", "Alice", "Bob"]),
        ("stableford", vec!["Alice", "Bob", "Carol", "Eve"]),
        ("36system", vec!["Eve", "Carol", "Alice", "Bob"]),
        ("callaway", vec!["Eve", "Carol", "Alice", "Bob"]),
    ];

    for (system, expected) in cases {
        let req = test::TestRequest::get()
            .uri(&format!("/leaderboard?tournament=t1&system={system}&json=1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{system}");

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(player_names(&body), expected, "{system}");

        let ranks: Vec<i64> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["rank"].as_i64().unwrap())
            .collect();
        assert_eq!(ranks, vec![1, 2, 3, 4], "{system}");
        assert!(
            body.as_array().unwrap().iter().all(|e| e["system"] == system),
            "{system}"
        );
    }
}

#[actix_web::test]
async fn test_leaderboard_stableford_values() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/leaderboard?tournament=t1&system=stableford&json=true")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let points: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["points"].as_i64().unwrap())
        .collect();
    assert_eq!(points, vec![36, 34, 18, 0]);
    assert_eq!(body[0]["net_score"], 36);
    assert_eq!(body[0]["handicap"], 10);
}

#[actix_web::test]
async fn test_leaderboard_36system_values() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/leaderboard?tournament=t1&system=36system&json=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    let nets: Vec<(i64, i64)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|e| (e["handicap"].as_i64().unwrap(), e["net_score"].as_i64().unwrap()))
        .collect();
    assert_eq!(nets, vec![(0, 0), (0, 36), (29, 43), (30, 44)]);
}

#[actix_web::test]
async fn test_leaderboard_uses_tournament_system_by_default() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/leaderboard?tournament=t1&json=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body[0]["system"], "stroke");
    assert_eq!(body[0]["net_score"], -12);
    assert_eq!(body[3]["handicap"], 2);

    // nobody has a score in t2 yet
    let req = test::TestRequest::get()
        .uri("/leaderboard?tournament=t2&json=1")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn test_leaderboard_errors() {
    let app = app!();

    let cases = [
        ("/leaderboard?json=1", StatusCode::BAD_REQUEST),
        ("/leaderboard?tournament=%20&json=1", StatusCode::BAD_REQUEST),
        ("/leaderboard?tournament=t1&system=skins", StatusCode::BAD_REQUEST),
        ("/leaderboard?tournament=t9&json=1", StatusCode::NOT_FOUND),
        ("/leaderboard?tournament=t1&json=maybe", StatusCode::BAD_REQUEST),
    ];
    for (uri, status) in cases {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), status, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert!(body.get("error").is_some(), "{uri}");
    }
}

#[actix_web::test]
async fn test_leaderboard_html() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/leaderboard?tournament=t1&system=stableford")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = test::read_body(resp).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("Spring Open (stableford)"));
    assert!(html.contains("POINTS"));
    assert!(html.contains("Alice"));
    assert!(!html.contains("Dan"));

    let req = test::TestRequest::get()
        .uri("/leaderboard?tournament=t2")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert!(String::from_utf8_lossy(&body).contains("No scores yet."));
}

#[actix_web::test]
async fn test_index_title() {
    let app = app!();
    let req = test::TestRequest::get().uri("/?tournament=t2").to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("<title>Autumn Cup</title>"));
    assert!(html.contains("leaderboard?tournament=t2"));

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert!(String::from_utf8_lossy(&body).contains("<title>Leaderboard</title>"));
}

#[actix_web::test]
async fn test_index_encodes_tournament_id() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/?tournament=t1%26system%3Dcallaway")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let html = String::from_utf8_lossy(&body);
    assert!(html.contains("hx-get=\"leaderboard?tournament=t1%26system%3Dcallaway\""));
    assert!(!html.contains("system=callaway"));

    let html = golf_leaderboard::view::index::render_index_template("Cup", "spring open/2026")
        .into_string();
    assert!(html.contains("leaderboard?tournament=spring%20open%2F2026"));
}

#[actix_web::test]
async fn test_leaderboard_json_flag_spellings() {
    let app = app!();
    for flag in ["1", "true", "TRUE", "Yes"] {
        let req = test::TestRequest::get()
            .uri(&format!("/leaderboard?tournament=t1&json={flag}"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK, "{flag}");
        let body: Value = test::read_body_json(resp).await;
        assert!(body.is_array(), "{flag}");
    }

    for flag in ["0", "False", "no"] {
        let req = test::TestRequest::get()
            .uri(&format!("/leaderboard?tournament=t1&json={flag}"))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert!(String::from_utf8_lossy(&body).contains("styled-table"), "{flag}");
    }
}
