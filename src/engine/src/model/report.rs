use serde::Serialize;

use super::game::{Move, Outcome};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSummary {
    pub human_wins: u32,
    pub computer_wins: u32,
    pub tied_rounds: u32,
    pub rounds_played: u32,
}

/// Everything the shell needs to narrate one round.
#[derive(Serialize, Debug, Clone)]
pub struct RoundReport {
    pub round: u32,
    pub human_name: String,
    pub human_move: Move,
    pub computer_name: String,
    pub computer_move: Move,
    pub outcome: Outcome,
    pub summary: ScoreSummary,
}

#[derive(Serialize, Debug, Clone)]
pub struct GameReport {
    pub winner_name: String,
    pub outcome: Outcome,
    pub summary: ScoreSummary,
}
