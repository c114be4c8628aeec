//! One-shot evaluation of a position given as text.

use crate::games::tictactoe::{Board, Mark, Position};
use crate::search::{Engine, Score};
use crate::session::SessionError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// What the engine makes of a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// The position in compact form.
    pub board: String,
    /// Mark on move.
    pub to_move: Mark,
    /// Chosen move.
    pub best_move: Position,
    /// Score for `to_move`: 1 win, 0 draw, -1 loss.
    pub score: Score,
    /// Nodes searched.
    pub nodes: u64,
}

impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} to move: {}  score {}  ({} nodes)",
            self.to_move, self.best_move, self.score, self.nodes
        )
    }
}

/// The mark due to move, assuming X moved first.
pub fn infer_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}

/// Asks `engine` for a move on `board` for `to_move` (inferred if `None`).
///
/// # Errors
///
/// [`SessionError::GameOver`] on a finished board.
#[instrument(skip(engine), fields(board = %board.to_compact()))]
pub fn analyze(
    board: &Board,
    engine: &mut Engine,
    to_move: Option<Mark>,
) -> Result<Analysis, SessionError> {
    if board.outcome().is_terminal() {
        return Err(SessionError::GameOver);
    }
    let to_move = to_move.unwrap_or_else(|| infer_to_move(board));

    let mut scratch = *board;
    let result = engine.choose_move(&mut scratch, to_move);
    let best_move = result.best_move.ok_or(SessionError::NoLegalMove)?;
    Ok(Analysis {
        board: board.to_compact(),
        to_move,
        best_move,
        score: result.score,
        nodes: engine.last_nodes(),
    })
}
