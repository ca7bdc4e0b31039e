use crate::model::game::Move;

use super::history::MoveHistory;

/// Per-move selection frequencies of the human player, computed on demand
/// over the whole session's history.
pub struct Statistics<'a> {
    history: &'a MoveHistory,
}

impl<'a> Statistics<'a> {
    pub fn new(history: &'a MoveHistory) -> Self {
        Statistics { history }
    }

    /// Share of recorded human moves equal to `choice`. Zero across the
    /// board when nothing has been recorded yet.
    pub fn frequency(&self, choice: Move) -> f64 {
        let total = self.history.count();
        if total == 0 {
            return 0.0;
        }
        let count = self
            .history
            .entries()
            .filter(|entry| entry.human_move == choice)
            .count();
        count as f64 / total as f64
    }
}
