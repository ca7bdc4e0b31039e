use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::game::Move;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub round: u32,
    pub human_move: Move,
    pub computer_move: Move,
}

/// Session-wide move log, keyed by round index. Grows for the life of the
/// process; a game reset never clears it.
#[derive(Debug, Default)]
pub struct MoveHistory {
    entries: BTreeMap<u32, HistoryEntry>,
}

impl MoveHistory {
    pub fn new() -> Self {
        MoveHistory {
            entries: BTreeMap::new(),
        }
    }

    /// Insert or overwrite the entry for `round`.
    pub fn record(&mut self, round: u32, human_move: Move, computer_move: Move) {
        self.entries.insert(
            round,
            HistoryEntry {
                round,
                human_move,
                computer_move,
            },
        );
    }

    /// Entries in ascending round order.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.values()
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
