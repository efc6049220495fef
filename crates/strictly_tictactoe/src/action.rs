//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. They represent
//! the player's intent and can be validated independently of execution.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
    /// Ply number of the move (1 for the opening move).
    pub ply: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} {} -> {}", self.ply, self.player, self.position.label())
    }
}

/// Why a move request was ignored.
///
/// Rejections come from ordinary interaction (clicking a taken square, or
/// clicking after the game ended) and leave the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The position at the current step is already won or drawn.
    #[display("Game is already over")]
    GameDecided,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),
}

/// Result of a move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was recorded as history entry `ply`.
    Applied {
        /// Ply of the new entry, which is also the new current step.
        ply: usize,
    },
    /// The request was a no-op.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// True if the move changed the session.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// Errors surfaced by session operations.
///
/// These indicate a caller bug, unlike [`Rejection`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SessionError {
    /// Requested history step does not exist.
    #[display("Step {} is out of range (history has {} entries)", step, len)]
    OutOfRange {
        /// The requested step.
        step: usize,
        /// Number of history entries at the time of the request.
        len: usize,
    },
}
