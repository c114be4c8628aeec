//! Move history for the game in progress.

use super::settings::Side;
use crate::games::tictactoe::{Board, Move, MoveError};
use serde::{Deserialize, Serialize};

/// A move together with the side that made it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct HistoryEntry {
    /// Who played the move.
    pub side: Side,
    /// The move itself.
    pub mv: Move,
}

/// Ordered moves of the current game.
///
/// Replaying the entries from an empty board reproduces the session board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
}

impl MoveHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Removes and returns the newest entry.
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// The newest entry.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of moves played.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True before the first move.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every move.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// True if `side` has at least one move on record.
    pub fn has_moves_by(&self, side: Side) -> bool {
        self.entries.iter().any(|entry| entry.side == side)
    }

    /// Rebuilds the board these moves describe.
    ///
    /// # Errors
    ///
    /// Fails if two entries target the same square.
    pub fn replay(&self) -> Result<Board, MoveError> {
        Board::replay(self.entries.iter().map(|entry| &entry.mv))
    }
}
