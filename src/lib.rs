//! Tic-tac-toe against an alpha-beta engine.
//!
//! The crate is split into three layers:
//!
//! - **Games**: board, marks, move application and the win/draw rules
//! - **Search**: alpha-beta with a row-major tie-break, and the engine that
//!   picks a policy per difficulty
//! - **Session**: turn order, undo and the running score for one player
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Difficulty, Phase, Session, Side};
//!
//! let mut session = Session::default();
//! session.start(Side::Human, Difficulty::Hard);
//! session.apply_human_move(1, 1)?;
//! let (reply, _) = session.request_automated_move()?;
//! assert_eq!(session.phase(), Phase::HumanTurn);
//! assert!(session.board().get(reply) != strictly_minimax::Square::Empty);
//! # Ok::<(), strictly_minimax::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod analysis;
mod config;
mod games;
mod search;
mod selfplay;
mod session;
mod terminal;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Mark, Move, MoveError, Outcome, Player, Position, Square, rules,
};

// Crate-level exports - Search
pub use search::{
    AlphaBeta, DEFAULT_MEDIUM_DEPTH, DRAW, Difficulty, Engine, FULL_DEPTH, LOSS, Score,
    SearchResult, WIN, minimax,
};

// Crate-level exports - Session
pub use session::invariants;
pub use session::{
    FirstMover, HistoryEntry, Marks, MoveHistory, Phase, ScoreTally, Session, SessionError, Side,
};

// Crate-level exports - Configuration
pub use config::{ConfigError, SessionConfig};

// Crate-level exports - Front ends
pub use analysis::{Analysis, analyze, infer_to_move};
pub use selfplay::{MatchSummary, SelfPlay};
pub use terminal::{PlayCommand, run_play};
