//! Recoverable errors reported to the presentation layer.

use crate::games::tictactoe::{MoveError, Position};

/// A request the session refused. The session state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SessionError {
    /// No game has started yet.
    #[display("Choose who plays first before moving")]
    NoFirstMover,

    /// Coordinates outside the 3x3 grid.
    #[display("Cell ({}, {}) is off the board", row, col)]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// A human move was submitted while the engine is on move.
    #[display("It's the engine's turn")]
    NotHumanTurn,

    /// The engine was asked to move while the human is on move.
    #[display("It's the player's turn")]
    NotAutomatedTurn,

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// Undo requested but the human has no move to take back.
    #[display("Nothing to undo")]
    NothingToUndo,

    /// The engine produced no move for a board that still had one.
    #[display("Engine found no legal move")]
    NoLegalMove,
}

impl std::error::Error for SessionError {}

impl From<MoveError> for SessionError {
    fn from(err: MoveError) -> Self {
        match err {
            MoveError::SquareOccupied(pos) => SessionError::SquareOccupied(pos),
        }
    }
}
