//! History length matches the number of occupied squares.

use super::Invariant;
use crate::games::tictactoe::Square;
use crate::session::Session;

/// Invariant: every recorded move owns exactly one occupied square.
pub struct HistoryConsistentInvariant;

impl Invariant<Session> for HistoryConsistentInvariant {
    fn holds(session: &Session) -> bool {
        let occupied = session
            .board()
            .squares()
            .iter()
            .filter(|s| **s != Square::Empty)
            .count();
        session.history().len() == occupied
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Difficulty;
    use crate::session::Side;

    #[test]
    fn test_empty_session_holds() {
        assert!(HistoryConsistentInvariant::holds(&Session::default()));
    }

    #[test]
    fn test_dropped_history_entry_violates() {
        let mut session = Session::default();
        session.start(Side::Human, Difficulty::Easy);
        session.apply_human_move(1, 1).unwrap();

        session.history.pop();
        assert!(!HistoryConsistentInvariant::holds(&session));
    }
}
