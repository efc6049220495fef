//! Properties every reachable [`GameSession`](crate::GameSession) satisfies.
//!
//! The session checks them after each applied move in debug builds; tests
//! check them directly, including against deliberately corrupted histories.

/// A property of a state.
pub trait Invariant<S> {
    /// True if `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// An invariant that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Statement of the broken property.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps an invariant's description.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Invariants checked together against one session.
///
/// Every member is evaluated, so a corrupted history reports all of the
/// properties it breaks rather than the first.
pub trait InvariantSet<S> {
    /// Returns the description of each invariant that fails on `state`.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let results = [
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
            (C::holds(state), C::description()),
        ];
        let violations: Vec<_> = results
            .into_iter()
            .filter(|(holds, _)| !holds)
            .map(|(_, description)| InvariantViolation::new(description))
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

pub mod history_consistent;
pub mod monotonic_history;
pub mod turn_parity;

pub use history_consistent::HistoryConsistentInvariant;
pub use monotonic_history::MonotonicHistoryInvariant;
pub use turn_parity::TurnParityInvariant;

/// All session invariants as a composable set.
pub type SessionInvariants = (
    HistoryConsistentInvariant,
    MonotonicHistoryInvariant,
    TurnParityInvariant,
);
