//! Game session: turn order, undo, and the running score.

mod controller;
mod error;
mod history;
pub mod invariants;
mod settings;
mod tally;

pub use controller::{Phase, Session};
pub use error::SessionError;
pub use history::{HistoryEntry, MoveHistory};
pub use settings::{FirstMover, Marks, Side};
pub use tally::ScoreTally;
