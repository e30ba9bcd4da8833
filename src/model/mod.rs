pub mod leaderboard;
pub mod player;
pub mod score;
pub mod tournament;

pub use leaderboard::*;
pub use player::*;
pub use score::*;
pub use tournament::*;
