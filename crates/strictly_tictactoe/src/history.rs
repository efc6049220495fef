//! Branchable move history.
//!
//! The history is a log of board snapshots. Entry `k` is the board after
//! ply `k`; entry 0 is always the empty pre-game board. Appending after a
//! jump into the past discards every entry beyond the jump target first.

use super::action::Move;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Immutable snapshot of the board after a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
    position: Option<Position>,
    ply: usize,
}

impl HistoryEntry {
    fn initial() -> Self {
        Self {
            board: Board::new(),
            position: None,
            ply: 0,
        }
    }

    /// Board after this entry's move.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Position of the originating move (`None` for the pre-game entry).
    pub fn position(&self) -> Option<Position> {
        self.position
    }

    /// Ply number, equal to the entry's index in the history.
    pub fn ply(&self) -> usize {
        self.ply
    }

    /// The move that produced this entry.
    ///
    /// `None` for the pre-game entry, and for any entry claiming a move at
    /// ply 0.
    pub fn to_move(&self) -> Option<Move> {
        let prior = self.ply.checked_sub(1)?;
        self.position
            .map(|position| Move::new(Player::for_ply(prior), position, self.ply))
    }
}

/// Ordered log of board snapshots, never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
        }
    }

    /// Number of entries, including the pre-game entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the newest entry.
    pub fn last_step(&self) -> usize {
        self.entries.len() - 1
    }

    /// Entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Most recent entry.
    pub fn last(&self) -> &HistoryEntry {
        &self.entries[self.last_step()]
    }

    /// All entries in ply order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Drops every entry after `step`.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub(crate) fn truncate_after(&mut self, step: usize) {
        if step + 1 < self.entries.len() {
            debug!(discarded = self.entries.len() - step - 1, "Discarding redo branch");
            self.entries.truncate(step + 1);
        }
    }

    /// Appends the board produced by playing `position`. Returns the new ply.
    pub(crate) fn push(&mut self, board: Board, position: Position) -> usize {
        let ply = self.entries.len();
        self.entries.push(HistoryEntry {
            board,
            position: Some(position),
            ply,
        });
        ply
    }

    /// Entries with arbitrary contents, for exercising invariant checks.
    #[cfg(test)]
    pub(crate) fn entries_mut(&mut self) -> &mut Vec<HistoryEntry> {
        &mut self.entries
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl HistoryEntry {
    pub(crate) fn from_parts(board: Board, position: Option<Position>, ply: usize) -> Self {
        Self {
            board,
            position,
            ply,
        }
    }
}
