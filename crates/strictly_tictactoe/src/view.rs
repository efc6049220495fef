//! Read model handed to the presentation layer.

use super::history::HistoryEntry;
use super::rules::WinLine;
use super::{Board, Player, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Derived classification of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves can still be made.
    InProgress,
    /// A player completed a line.
    Win {
        /// The winning player.
        player: Player,
        /// The completed line.
        line: WinLine,
    },
    /// All nine squares filled without a line.
    Draw,
}

impl Outcome {
    /// True while the game accepts moves.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Outcome::InProgress)
    }

    /// The winning player, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// The winning line, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Display order of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MoveOrder {
    /// Oldest entry first.
    #[default]
    Ascending,
    /// Newest entry first.
    Descending,
}

impl MoveOrder {
    /// The other order.
    pub fn toggled(self) -> Self {
        match self {
            MoveOrder::Ascending => MoveOrder::Descending,
            MoveOrder::Descending => MoveOrder::Ascending,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryItem {
    /// History step this row jumps to.
    #[getter(copy)]
    step: usize,
    /// Originating move position (`None` for game start).
    #[getter(copy)]
    position: Option<Position>,
    /// Whether this is the step currently shown.
    #[getter(copy)]
    is_current: bool,
}

impl HistoryItem {
    pub(crate) fn from_entry(entry: &HistoryEntry, current_step: usize) -> Self {
        Self {
            step: entry.ply(),
            position: entry.position(),
            is_current: entry.ply() == current_step,
        }
    }

    /// Move list label, e.g. `Go to move #3 (2, 1)` as (column, row).
    pub fn label(&self) -> String {
        match self.position {
            None => "Go to game start".to_string(),
            Some(pos) => format!("Go to move #{} ({}, {})", self.step, pos.col(), pos.row()),
        }
    }
}

/// Snapshot of everything needed to render the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GameView {
    /// Board at the current step.
    board: Board,
    /// Player to move at the current step.
    #[getter(copy)]
    current_player: Player,
    /// Outcome at the current step.
    #[getter(copy)]
    outcome: Outcome,
    /// Move list, sorted per `move_order`.
    history: Vec<HistoryItem>,
    /// Step currently shown.
    #[getter(copy)]
    current_step: usize,
    /// Order of `history`.
    #[getter(copy)]
    move_order: MoveOrder,
}

impl GameView {
    pub(crate) fn new(
        board: Board,
        outcome: Outcome,
        entries: &[HistoryEntry],
        current_step: usize,
        move_order: MoveOrder,
    ) -> Self {
        let mut history: Vec<_> = entries
            .iter()
            .map(|entry| HistoryItem::from_entry(entry, current_step))
            .collect();
        if move_order == MoveOrder::Descending {
            history.reverse();
        }
        Self {
            board,
            current_player: Player::for_ply(current_step),
            outcome,
            history,
            current_step,
            move_order,
        }
    }

    /// Status line: `Next player: X`, `Winner: O` or `Draw`.
    pub fn status_line(&self) -> String {
        match self.outcome {
            Outcome::Win { player, .. } => format!("Winner: {}", player),
            Outcome::Draw => "Draw".to_string(),
            Outcome::InProgress => format!("Next player: {}", self.current_player),
        }
    }

    /// The winning line to highlight, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.outcome.winning_line()
    }

    /// Whether the square at `pos` belongs to the winning line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line().is_some_and(|line| line.contains(pos))
    }
}
