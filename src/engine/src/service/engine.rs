use tracing::debug;

use crate::model::game::Outcome;
use crate::model::player::Player;
use crate::model::report::{GameReport, RoundReport};

use super::history::MoveHistory;
use super::score::ScoreKeeper;
use super::strategy::MoveChooser;

/// Runs rounds between the human and the computer. Owns the score state
/// and the session-wide move history; both choosers are consulted through
/// the same interface.
pub struct MatchEngine {
    human: Player,
    computer: Player,
    human_chooser: Box<dyn MoveChooser>,
    computer_chooser: Box<dyn MoveChooser>,
    score: ScoreKeeper,
    history: MoveHistory,
}

impl MatchEngine {
    pub fn new(
        human: Player,
        computer: Player,
        human_chooser: Box<dyn MoveChooser>,
        computer_chooser: Box<dyn MoveChooser>,
    ) -> Self {
        MatchEngine {
            human,
            computer,
            human_chooser,
            computer_chooser,
            score: ScoreKeeper::new(),
            history: MoveHistory::new(),
        }
    }

    /// One full round: collect both moves, compare, tally, log. The
    /// computer chooses against the history as it stood before this round.
    pub fn play_round(&mut self) -> RoundReport {
        let human_move = self.human_chooser.choose_move(&self.history);
        let computer_move = self.computer_chooser.choose_move(&self.history);
        self.human.current_move = Some(human_move);
        self.computer.current_move = Some(computer_move);

        let outcome = self.score.tally(human_move, computer_move);
        match outcome {
            Outcome::Win => self.human.increase_score(),
            Outcome::Loss => self.computer.increase_score(),
            Outcome::Draw => {}
        }

        let round = self.score.total_rounds();
        self.history.record(round, human_move, computer_move);
        debug!(round, %human_move, %computer_move, ?outcome, "round complete");

        RoundReport {
            round,
            human_name: self.human.name.clone(),
            human_move,
            computer_name: self.computer.name.clone(),
            computer_move,
            outcome,
            summary: self.score.summary(),
        }
    }

    /// Winner declaration, present once a side has taken enough rounds.
    pub fn game_winner(&self) -> Option<GameReport> {
        let outcome = self.score.game_winner()?;
        let winner_name = match outcome {
            Outcome::Win => self.human.name.clone(),
            _ => self.computer.name.clone(),
        };
        Some(GameReport {
            winner_name,
            outcome,
            summary: self.score.summary(),
        })
    }

    pub fn reset_game(&mut self) {
        self.score.reset_scores(&mut self.human, &mut self.computer);
    }

    pub fn human(&self) -> &Player {
        &self.human
    }

    pub fn computer(&self) -> &Player {
        &self.computer
    }

    /// The session log, for statistics and the end-of-session display.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }
}
