pub mod aggregate;
pub mod handicap;
pub mod leaderboard;
pub mod stableford;

pub use aggregate::*;
pub use handicap::*;
pub use leaderboard::*;
pub use stableford::*;
