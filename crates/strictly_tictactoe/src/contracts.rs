//! Contract-based validation for session transitions.
//!
//! Contracts define correctness through preconditions and postconditions,
//! Hoare style: {P} action {Q}. A failed precondition is a [`Rejection`]
//! (the request is ignored); a failed postcondition is a bug in the
//! session itself.

use super::action::Rejection;
use super::invariants::{InvariantSet, SessionInvariants};
use super::{GameSession, Position};
use tracing::instrument;

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), ContractViolation>;
}

/// A postcondition failed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Postcondition failed: {}", description)]
pub struct ContractViolation {
    /// What went wrong.
    pub description: String,
}

/// Precondition: the position at the current step is undecided.
pub struct GameUndecided;

impl GameUndecided {
    /// Rejects moves on a won or drawn position.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), Rejection> {
        if session.outcome().is_in_progress() {
            Ok(())
        } else {
            Err(Rejection::GameDecided)
        }
    }
}

/// Precondition: the square is empty at the current step.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects moves on occupied squares.
    #[instrument(skip(session))]
    pub fn check(pos: Position, session: &GameSession) -> Result<(), Rejection> {
        if session.board().is_empty(pos) {
            Ok(())
        } else {
            Err(Rejection::CellOccupied(pos))
        }
    }
}

/// Contract for [`GameSession::apply_move`].
///
/// Preconditions, in order:
/// - Game at the current step is still in progress
/// - Square is empty
///
/// Postconditions:
/// - Session invariants hold
/// - History was cut back to `before.current_step + 1` entries and
///   grew by exactly one
/// - The new entry is current
pub struct ApplyMoveContract;

impl Contract<GameSession, Position> for ApplyMoveContract {
    fn pre(session: &GameSession, pos: &Position) -> Result<(), Rejection> {
        GameUndecided::check(session)?;
        SquareIsEmpty::check(*pos, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), ContractViolation> {
        SessionInvariants::check_all(after).map_err(|violations| ContractViolation {
            description: violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; "),
        })?;

        let expected_len = before.current_step() + 2;
        if after.history().len() != expected_len {
            return Err(ContractViolation {
                description: format!(
                    "history has {} entries, expected {}",
                    after.history().len(),
                    expected_len
                ),
            });
        }
        if after.current_step() != after.history().last_step() {
            return Err(ContractViolation {
                description: "new entry is not the current step".to_string(),
            });
        }
        // The kept prefix is untouched.
        if before.history().entries()[..=before.current_step()]
            != after.history().entries()[..=before.current_step()]
        {
            return Err(ContractViolation {
                description: "entries before the move were altered".to_string(),
            });
        }
        Ok(())
    }
}
