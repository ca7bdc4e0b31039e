use rand::seq::SliceRandom;
use tracing::debug;

use crate::model::game::{Move, MOVE_SET};

use super::history::MoveHistory;
use super::statistics::Statistics;

/// How a player comes up with a move.
pub trait MoveChooser {
    fn choose_move(&self, history: &MoveHistory) -> Move;
}

/// Always plays the same move. Useful as an opponent stand-in under test.
pub struct FixedMove(pub Move);

impl MoveChooser for FixedMove {
    fn choose_move(&self, _: &MoveHistory) -> Move {
        self.0
    }
}

// A move counts as a habit above this share of the human's history.
const HABIT_FLOOR: f64 = 0.33;
// A habit is only chased while the other two shares stay below this.
const COUNTER_CEILING: f64 = 0.50;

/// Counters the human's most-thrown move when one stands out, otherwise
/// picks uniformly at random. Frequencies are re-read every round.
pub struct AdaptiveStrategy;

impl MoveChooser for AdaptiveStrategy {
    fn choose_move(&self, history: &MoveHistory) -> Move {
        let stats = Statistics::new(history);
        let rock = stats.frequency(Move::Rock);
        let paper = stats.frequency(Move::Paper);
        let scissors = stats.frequency(Move::Scissors);

        if rock > HABIT_FLOOR && paper < COUNTER_CEILING && scissors < COUNTER_CEILING {
            debug!(rock, "countering a rock habit with paper");
            Move::Paper
        } else if paper > HABIT_FLOOR && rock < COUNTER_CEILING && scissors < COUNTER_CEILING {
            debug!(paper, "countering a paper habit with scissors");
            Move::Scissors
        } else if scissors > HABIT_FLOOR && paper < COUNTER_CEILING && rock < COUNTER_CEILING {
            debug!(scissors, "countering a scissors habit with rock");
            Move::Rock
        } else {
            *MOVE_SET
                .choose(&mut rand::thread_rng())
                .expect("move set is non-empty")
        }
    }
}
