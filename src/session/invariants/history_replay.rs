//! The board is exactly what the recorded moves produce.

use super::Invariant;
use crate::session::Session;

/// Invariant: replaying the history from an empty board yields the session board.
pub struct HistoryReplayInvariant;

impl Invariant<Session> for HistoryReplayInvariant {
    fn holds(session: &Session) -> bool {
        session
            .history()
            .replay()
            .is_ok_and(|board| board == *session.board())
    }

    fn description() -> &'static str {
        "Replaying the move history reproduces the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Move, Player, Position};
    use crate::search::Difficulty;
    use crate::session::{HistoryEntry, Side};

    #[test]
    fn test_holds_through_a_round() {
        let mut session = Session::default();
        session.start(Side::Automated, Difficulty::Hard);
        session.request_automated_move().unwrap();
        session.apply_human_move(2, 2).unwrap();
        assert!(HistoryReplayInvariant::holds(&session));
    }

    #[test]
    fn test_duplicate_square_in_history_violates() {
        let mut session = Session::default();
        session.start(Side::Human, Difficulty::Hard);
        session.apply_human_move(0, 0).unwrap();

        session.history.push(HistoryEntry::new(
            Side::Automated,
            Move::new(Player::X, Position::TopLeft),
        ));
        assert!(!HistoryReplayInvariant::holds(&session));
    }
}
