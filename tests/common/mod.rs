#![allow(dead_code)]

use golf_leaderboard::model::{CoursePars, Player, RawScore};
use golf_leaderboard::storage::SeedData;

pub const TOURNAMENT: &str = "t1";

pub fn seed() -> SeedData {
    SeedData::from_json_str(include_str!("../test_seed.json")).expect("test seed is valid")
}

pub fn score(player_id: &str, hole: i32, strokes: i32) -> RawScore {
    RawScore::new(TOURNAMENT, player_id, hole, strokes)
}

/// One record per hole, hole 1 first.
pub fn round(player_id: &str, strokes: &[i32]) -> Vec<RawScore> {
    strokes
        .iter()
        .zip(1..)
        .map(|(&s, hole)| score(player_id, hole, s))
        .collect()
}

pub fn all_fours() -> CoursePars {
    CoursePars::from(vec![4; 18])
}

pub fn player(id: &str, handicap: i32) -> Player {
    Player::new(id, id.to_uppercase(), handicap)
}
