//! Sides alternate, starting with the first mover, each with its own mark.

use super::Invariant;
use crate::session::{Phase, Session, Side};

/// Invariant: the history alternates sides starting with the first mover,
/// every entry carries its side's mark, and the phase names the side due next.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let entries = session.history().entries();
        let Some(first) = session.first_mover() else {
            return entries.is_empty();
        };

        let marks = session.marks();
        let mut expected = first;
        for entry in entries {
            if entry.side != expected || entry.mv.player != marks.of(entry.side) {
                return false;
            }
            expected = expected.toggle();
        }

        match session.phase() {
            Phase::HumanTurn => expected == Side::Human,
            Phase::AutomatedTurn => expected == Side::Automated,
            Phase::GameOver => true,
            Phase::AwaitingFirstPlayerChoice => entries.is_empty(),
        }
    }

    fn description() -> &'static str {
        "Sides alternate from the first mover, each playing its own mark"
    }
}
