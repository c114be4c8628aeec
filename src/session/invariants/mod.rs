//! Properties every [`Session`](super::Session) must satisfy between calls.
//!
//! The controller checks them after each mutation in debug builds. They are
//! plain types so tests can check them directly against hand-built states.

mod alternating_turn;
mod history_consistent;
mod history_replay;

pub use alternating_turn::AlternatingTurnInvariant;
pub use history_consistent::HistoryConsistentInvariant;
pub use history_replay::HistoryReplayInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants checked together.
///
/// Implemented for tuples of [`Invariant`] types.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// # Errors
    ///
    /// Returns every violated invariant, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn push_if_broken<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        push_if_broken::<S, I1>(state, &mut violations);
        push_if_broken::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        push_if_broken::<S, I1>(state, &mut violations);
        push_if_broken::<S, I2>(state, &mut violations);
        push_if_broken::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// Everything a session guarantees between calls.
pub type SessionInvariants = (
    HistoryReplayInvariant,
    HistoryConsistentInvariant,
    AlternatingTurnInvariant,
);
