mod common;

use common::{TOURNAMENT, seed};
use golf_leaderboard::load_leaderboard;
use golf_leaderboard::model::ScoringSystem;
use golf_leaderboard::storage::{MemoryStore, SeedData, SqliteStore, Storage, StorageError};

async fn sqlite_store() -> Result<SqliteStore, StorageError> {
    let store = SqliteStore::open_in_memory()?;
    store.seed(seed()).await?;
    Ok(store)
}

async fn check_store_contents(store: &dyn Storage) -> Result<(), StorageError> {
    let tournament = store.get_tournament(TOURNAMENT).await?;
    assert_eq!(tournament.name, "Spring Open");
    assert_eq!(tournament.course_id, "c1");
    assert_eq!(tournament.scoring_system, ScoringSystem::Stroke);

    let players = store.fetch_players().await?;
    let ids: Vec<&str> = players.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["p1", "p2", "p3", "p4", "p5"]);
    assert_eq!(players[0].team.as_deref(), Some("Red"));
    assert_eq!(players[2].team, None);

    let scores = store.fetch_scores(TOURNAMENT).await?;
    assert_eq!(scores.len(), 18 + 18 + 9 + 1);
    assert!(store.fetch_scores("t2").await?.is_empty());

    let pars = store.fetch_course_pars("c1").await?;
    assert_eq!(pars.total(), 72);
    assert_eq!(pars.par_for_hole(3), 3);

    let overrides = store.fetch_handicap_overrides(TOURNAMENT).await?;
    assert_eq!(overrides.get("p2"), Some(&2));
    assert!(store.fetch_handicap_overrides("t2").await?.is_empty());
    assert!(store.fetch_handicap_overrides("nope").await?.is_empty());

    assert!(matches!(
        store.get_tournament("nope").await,
        Err(StorageError::NotFound(_))
    ));
    assert!(matches!(
        store.fetch_course_pars("nope").await,
        Err(StorageError::NotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn test_memory_store() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::from_seed(seed())?;
    check_store_contents(&store).await?;
    Ok(())
}

#[tokio::test]
async fn test_sqlite_store() -> Result<(), Box<dyn std::error::Error>> {
    let store = sqlite_store().await?;
    check_store_contents(&store).await?;

    // seeding twice updates rows in place
    store.seed(seed()).await?;
    assert_eq!(store.fetch_scores(TOURNAMENT).await?.len(), 46);
    assert_eq!(store.fetch_players().await?.len(), 5);

    store.reset().await?;
    assert!(store.fetch_players().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_both_stores_rank_the_same() -> Result<(), Box<dyn std::error::Error>> {
    let memory = MemoryStore::from_seed(seed())?;
    let sqlite = sqlite_store().await?;

    for system in ScoringSystem::ALL {
        let a = load_leaderboard(&memory, TOURNAMENT, Some(system)).await?;
        let b = load_leaderboard(&sqlite, TOURNAMENT, Some(system)).await?;
        assert_eq!(a.entries, b.entries, "{system}");
        assert_eq!(a.system, system);
    }
    Ok(())
}

#[tokio::test]
async fn test_stroke_board_from_seed() -> Result<(), Box<dyn std::error::Error>> {
    let store = MemoryStore::from_seed(seed())?;
    let data = load_leaderboard(&store, TOURNAMENT, None).await?;
    assert_eq!(data.system, ScoringSystem::Stroke);

    let rows: Vec<(&str, i32, i32, usize)> = data
        .entries
        .iter()
        .map(|e| (e.player.name.as_str(), e.gross_score, e.net_score(), e.thru))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Eve", 0, -12, 0),
            ("Carol", 36, 36, 9),
            ("Alice", 72, 62, 18),
            ("Bob", 74, 72, 18),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_stores_reject_out_of_range_seed() -> Result<(), Box<dyn std::error::Error>> {
    let mut huge_par = seed();
    huge_par.courses[0].pars[4] = 1_500_000_000;
    assert!(matches!(
        MemoryStore::from_seed(huge_par.clone()),
        Err(StorageError::Invalid(_))
    ));

    let sqlite = SqliteStore::open_in_memory()?;
    assert!(matches!(
        sqlite.seed(huge_par).await,
        Err(StorageError::Invalid(_))
    ));
    assert!(sqlite.fetch_players().await?.is_empty());
    Ok(())
}

#[test]
fn test_seed_validation() {
    let mut bad = seed();
    bad.tournaments[0].course_id = "missing".to_string();
    assert!(matches!(bad.validate(), Err(StorageError::Invalid(_))));

    let mut bad = seed();
    bad.scores[0].tournament_id = "missing".to_string();
    assert!(matches!(bad.validate(), Err(StorageError::Invalid(_))));

    let mut bad = seed();
    bad.courses[0].pars.pop();
    assert!(matches!(bad.validate(), Err(StorageError::Invalid(_))));

    for par in [0, -1, 11] {
        let mut bad = seed();
        bad.courses[0].pars[0] = par;
        assert!(matches!(bad.validate(), Err(StorageError::Invalid(_))), "par {par}");
    }

    for strokes in [-1, 100, i32::MAX] {
        let mut bad = seed();
        bad.scores[0].strokes = strokes;
        assert!(matches!(bad.validate(), Err(StorageError::Invalid(_))), "strokes {strokes}");
    }

    // the hole-0 marker and the edges of each range are fine
    let mut edges = seed();
    edges.courses[0].pars[0] = 10;
    edges.courses[0].pars[1] = 1;
    edges.scores[0].strokes = 99;
    assert_eq!(edges.validate(), Ok(()));

    assert!(matches!(
        SeedData::from_json_str("{\"courses\": 3}"),
        Err(StorageError::Parse(_))
    ));
}
