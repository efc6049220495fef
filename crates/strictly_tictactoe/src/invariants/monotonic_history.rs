//! Monotonic history: each entry adds exactly one mark to its predecessor.

use super::Invariant;
use crate::{GameSession, Player};

/// Invariant: entry `k` equals entry `k - 1` plus one mark, placed on a
/// previously empty square by the player whose turn ply `k - 1` was.
///
/// Squares only ever go from empty to occupied along a branch.
pub struct MonotonicHistoryInvariant;

impl Invariant<GameSession> for MonotonicHistoryInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().entries().windows(2).all(|pair| {
            let (prev, next) = (&pair[0], &pair[1]);
            let Some(pos) = next.position() else {
                return false;
            };
            prev.board().is_empty(pos)
                && next.board() == &prev.board().with_mark(pos, Player::for_ply(prev.ply()))
        })
    }

    fn description() -> &'static str {
        "Each history entry adds exactly one mark to an empty square"
    }
}
