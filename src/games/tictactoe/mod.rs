mod action;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use phases::Outcome;
pub use position::Position;
pub use types::{Board, BoardParseError, Player, Square};

/// A player as seen on the board.
pub type Mark = Player;
