use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use std::sync::Arc;

use golf_leaderboard::args::{self, CleanArgs};
use golf_leaderboard::controller::{index::index, leaderboard::leaderboard};
use golf_leaderboard::storage::{MemoryStore, SqliteStore, Storage};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();

    let args = args::args_checks()?;
    let storage = build_storage(&args).await?;
    let static_dir = args.static_dir.clone();

    log::info!("Listening on {}:{}", args.bind, args.port);
    HttpServer::new(move || {
        App::new()
            .app_data(Data::from(Arc::clone(&storage)))
            .route("/", web::get().to(index))
            .route("/leaderboard", web::get().to(leaderboard))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", static_dir.clone()))
    })
    .bind((args.bind.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}

async fn build_storage(args: &CleanArgs) -> Result<Arc<dyn Storage>, Box<dyn std::error::Error>> {
    if let Some(db_name) = &args.db_name {
        let store = SqliteStore::open(db_name)?;
        if args.db_reset {
            log::info!("Resetting tables in {db_name}");
            store.reset().await?;
        }
        if let Some(seed) = &args.seed_json {
            store.seed(seed.clone()).await?;
        }
        log::info!("Using sqlite store at {db_name}");
        Ok(Arc::new(store))
    } else {
        let seed = args.seed_json.clone().unwrap_or_default();
        log::info!(
            "Using in-memory store with {} players and {} tournaments",
            seed.players.len(),
            seed.tournaments.len()
        );
        Ok(Arc::new(MemoryStore::from_seed(seed)?))
    }
}
