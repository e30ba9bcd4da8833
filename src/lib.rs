pub mod args;
pub mod error;
pub mod model;
pub mod score;
pub mod storage;
pub mod controller {
    pub mod index;
    pub mod leaderboard;
}
pub mod view {
    pub mod index;
    pub mod leaderboard;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use controller::leaderboard::{LeaderboardData, load_leaderboard};
pub use score::generate_leaderboard;
