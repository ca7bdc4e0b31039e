use rand::seq::SliceRandom;
use serde::Serialize;

use super::game::Move;

/// Display names the computer opponent picks from. Cosmetic only.
pub const COMPUTER_NAMES: [&str; 5] = ["R2D2", "Hal", "Chappie", "Sonny", "Number 5"];

#[derive(Serialize, Debug, Clone)]
pub struct Player {
    pub name: String,
    pub current_move: Option<Move>,
    pub score: u32,
}

impl Player {
    pub fn human(name: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            current_move: None,
            score: 0,
        }
    }

    pub fn computer() -> Self {
        let name = COMPUTER_NAMES
            .choose(&mut rand::thread_rng())
            .expect("name pool is non-empty");
        Player {
            name: (*name).to_owned(),
            current_move: None,
            score: 0,
        }
    }

    pub fn increase_score(&mut self) {
        self.score += 1;
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
