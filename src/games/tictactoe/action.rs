//! First-class move type and the only code that mutates a [`Board`].
//!
//! The search engine and user-facing undo share the same primitive pair:
//! [`Board::apply`] fills one square, [`Board::revert`] empties the square
//! filled last. Keeping them strictly paired is what lets backtracking
//! search run on the session's own board.

use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position)
    }
}

/// Error that can occur when applying a move to a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

impl Board {
    /// Places `mv` on the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] without touching the board when
    /// the target square is not empty.
    #[instrument(level = "trace", skip(self), fields(board = %self.to_compact()))]
    pub fn apply(&mut self, mv: Move) -> Result<(), MoveError> {
        if !self.is_empty(mv.position) {
            warn!(%mv, "Rejected move onto occupied square");
            return Err(MoveError::SquareOccupied(mv.position));
        }
        self.place(mv);
        Ok(())
    }

    /// Empties `pos`, which must be the most recently filled square.
    ///
    /// Reverting anything else is a caller bug: it panics in debug builds and
    /// leaves the board untouched in release builds.
    pub fn revert(&mut self, pos: Position) {
        let last = self.last_placed();
        debug_assert_eq!(
            last,
            Some(pos),
            "revert must undo the most recent placement"
        );
        if last != Some(pos) {
            warn!(?pos, ?last, "Ignored revert of a square that was not placed last");
            return;
        }

        self.placed -= 1;
        self.trail[usize::from(self.placed)] = None;
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Unchecked placement for callers that only ever pick empty squares.
    pub(crate) fn place(&mut self, mv: Move) {
        debug_assert!(
            self.is_empty(mv.position),
            "placement onto occupied square {}",
            mv.position
        );
        self.squares[mv.position.to_index()] = Square::Occupied(mv.player);
        self.trail[usize::from(self.placed)] = Some(mv.position);
        self.placed += 1;
    }

    /// Rebuilds a board by applying `moves` in order to an empty board.
    ///
    /// # Errors
    ///
    /// Fails if any move lands on an occupied square.
    pub fn replay<'a>(moves: impl IntoIterator<Item = &'a Move>) -> Result<Board, MoveError> {
        let mut board = Board::new();
        for mv in moves {
            board.apply(*mv)?;
        }
        Ok(board)
    }
}
