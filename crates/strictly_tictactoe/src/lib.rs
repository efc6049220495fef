//! Pure tic-tac-toe game logic with time-travelling history.
//!
//! # Architecture
//!
//! - **Rules**: stateless win and draw detection over a board snapshot
//! - **History**: append-only log of board snapshots, truncated on branching
//! - **Session**: owns the history and the step pointer; everything else
//!   (turn, outcome, winner) is derived on read
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{GameSession, Outcome, Player, Position};
//!
//! let mut session = GameSession::new();
//! session.apply_move(Position::TopLeft);
//! session.apply_move(Position::Center);
//! session.jump_to(1).unwrap();
//!
//! let view = session.current_view();
//! assert_eq!(view.current_player(), Player::O);
//! assert_eq!(view.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod contracts;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod session;
mod types;
mod view;

pub use action::{Move, MoveOutcome, Rejection, SessionError};
pub use contracts::{ApplyMoveContract, Contract, ContractViolation};
pub use history::{History, HistoryEntry};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, SessionInvariants};
pub use position::Position;
pub use rules::{Detection, WinLine, detect};
pub use session::{GameSession, MAX_PLY};
pub use types::{Board, Player, Square};
pub use view::{GameView, HistoryItem, MoveOrder, Outcome};
