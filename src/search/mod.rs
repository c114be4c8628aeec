//! Move selection for the automated player.

mod alphabeta;
mod difficulty;
mod engine;

pub use alphabeta::{AlphaBeta, DRAW, FULL_DEPTH, LOSS, Score, SearchResult, WIN, minimax};
pub use difficulty::{DEFAULT_MEDIUM_DEPTH, Difficulty};
pub use engine::Engine;
