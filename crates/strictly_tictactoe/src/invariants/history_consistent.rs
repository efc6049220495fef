//! History consistency: entry `k` is ply `k`, entry 0 is the empty board.

use super::Invariant;
use crate::{Board, GameSession};

/// Invariant: the history is a well-formed ply log and the step pointer is
/// inside it.
pub struct HistoryConsistentInvariant;

impl Invariant<GameSession> for HistoryConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        let entries = session.history().entries();

        let Some(first) = entries.first() else {
            return false;
        };
        if first.board() != &Board::new() || first.position().is_some() {
            return false;
        }

        let plies_match = entries.iter().enumerate().all(|(k, entry)| entry.ply() == k);
        let moves_recorded = entries[1..].iter().all(|entry| entry.position().is_some());

        plies_match && moves_recorded && session.current_step() < entries.len()
    }

    fn description() -> &'static str {
        "History entry k has ply k, entry 0 is the empty board, step is in range"
    }
}
