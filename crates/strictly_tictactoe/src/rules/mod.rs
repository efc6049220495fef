//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules never look at history; a position is judged
//! from its squares alone.

pub mod win;

pub use win::{Detection, LINES, WinLine, detect};
