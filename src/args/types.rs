use clap::Parser;

use crate::storage::SeedData;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address to bind the http server to.
    #[arg(short = 'b', long, value_name = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "8081")]
    pub port: u16,
    /// Sqlite filename. Without it, scores are served from memory and --seed-json is required.
    #[arg(short = 'n', long, value_name = "DATABASE_NAME")]
    pub db_name: Option<String>,
    /// Json document of courses, players, tournaments and scores to load on startup.
    #[arg(
        long,
        value_name = "SEED_JSON",
        value_parser = crate::args::validation::check_readable_seed_json
    )]
    pub seed_json: Option<SeedData>,
    /// Drop and recreate the sqlite tables before seeding.
    #[arg(long, default_value_t = false)]
    pub db_reset: bool,
    #[arg(long, value_name = "STATIC_DIR", default_value = "./static")]
    pub static_dir: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub bind: String,
    pub port: u16,
    pub db_name: Option<String>,
    pub seed_json: Option<SeedData>,
    pub db_reset: bool,
    pub static_dir: String,
}

impl From<Args> for CleanArgs {
    fn from(args: Args) -> Self {
        Self {
            bind: args.bind.trim().to_string(),
            port: args.port,
            db_name: args.db_name.filter(|name| !name.trim().is_empty()),
            seed_json: args.seed_json,
            db_reset: args.db_reset,
            static_dir: args.static_dir,
        }
    }
}
