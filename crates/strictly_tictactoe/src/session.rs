//! Game session: the single owner of history and the step pointer.
//!
//! Turn, outcome and winner are never stored. They are recomputed from the
//! board at `current_step` on every read.

use super::action::{Move, MoveOutcome, SessionError};
use super::contracts::{ApplyMoveContract, Contract};
use super::history::History;
use super::rules;
use super::view::{GameView, MoveOrder, Outcome};
use super::{Board, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Number of plies that fill the board.
pub const MAX_PLY: usize = 9;

/// A tic-tac-toe game with navigable, branchable history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) history: History,
    pub(crate) current_step: usize,
    move_order: MoveOrder,
}

impl GameSession {
    /// Creates a session at the pre-game position.
    #[instrument]
    pub fn new() -> Self {
        Self::with_move_order(MoveOrder::default())
    }

    /// Creates a session whose move list starts in `move_order`.
    #[instrument]
    pub fn with_move_order(move_order: MoveOrder) -> Self {
        info!(%move_order, "Creating game session");
        Self {
            history: History::new(),
            current_step: 0,
            move_order,
        }
    }

    /// Builds a session by playing `positions` in order.
    ///
    /// Returns the session and the number of moves that were ignored.
    #[instrument(skip(positions))]
    pub fn replay(positions: impl IntoIterator<Item = Position>) -> (Self, usize) {
        let mut session = Self::new();
        let ignored = positions
            .into_iter()
            .filter(|pos| !session.apply_move(*pos).is_applied())
            .count();
        (session, ignored)
    }

    /// Full history, including entries beyond the current step.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Step currently shown.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Display order of the move list.
    pub fn move_order(&self) -> MoveOrder {
        self.move_order
    }

    /// Board at the current step.
    pub fn board(&self) -> &Board {
        // current_step < history.len() is maintained by every mutation.
        self.history.entries()[self.current_step].board()
    }

    /// Player to move at the current step.
    pub fn current_player(&self) -> Player {
        Player::for_ply(self.current_step)
    }

    /// Outcome of the position at the current step.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn outcome(&self) -> Outcome {
        match rules::detect(self.board()).into_inner() {
            Some((player, line)) => Outcome::Win { player, line },
            None if self.current_step == MAX_PLY => Outcome::Draw,
            None => Outcome::InProgress,
        }
    }

    /// Moves leading to the current step.
    pub fn moves(&self) -> Vec<Move> {
        self.history.entries()[1..=self.current_step]
            .iter()
            .filter_map(|entry| entry.to_move())
            .collect()
    }

    /// Read-only projection for rendering.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn current_view(&self) -> GameView {
        GameView::new(
            self.board().clone(),
            self.outcome(),
            self.history.entries(),
            self.current_step,
            self.move_order,
        )
    }

    /// Places the current player's mark at `pos`.
    ///
    /// A move on a decided position or an occupied square is ignored and
    /// leaves the session untouched. Otherwise any entries after the
    /// current step are discarded, the new board is appended and becomes
    /// the current step.
    #[instrument(skip(self), fields(step = self.current_step, player = %self.current_player()))]
    pub fn apply_move(&mut self, pos: Position) -> MoveOutcome {
        if let Err(rejection) = ApplyMoveContract::pre(self, &pos) {
            debug!(%rejection, "Move ignored");
            return MoveOutcome::Ignored(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let board = self.board().with_mark(pos, self.current_player());
        self.history.truncate_after(self.current_step);
        let ply = self.history.push(board, pos);
        self.current_step = self.history.last_step();

        #[cfg(debug_assertions)]
        {
            if let Err(violation) = ApplyMoveContract::post(&before, self) {
                tracing::error!(%violation, "Move postcondition failed");
            }
        }

        debug!(ply, "Move applied");
        MoveOutcome::Applied { ply }
    }

    /// Moves the step pointer to `step` without touching history.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::OutOfRange`] if `step` is not a history index.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), SessionError> {
        if step >= self.history.len() {
            warn!("Jump target out of range");
            return Err(SessionError::OutOfRange {
                step,
                len: self.history.len(),
            });
        }
        self.current_step = step;
        debug!("Jumped");
        Ok(())
    }

    /// Flips the move list order. Game state is unaffected.
    #[instrument(skip(self))]
    pub fn toggle_move_order(&mut self) -> MoveOrder {
        self.move_order = self.move_order.toggled();
        debug!(move_order = %self.move_order, "Move order toggled");
        self.move_order
    }

    /// Discards all history and returns to the pre-game position.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting game session");
        self.history = History::new();
        self.current_step = 0;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
