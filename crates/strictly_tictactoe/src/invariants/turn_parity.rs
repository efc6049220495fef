//! Turn parity: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameSession, Player};

/// Invariant: every history entry at ply `k` holds `k` marks, X owning
/// `ceil(k / 2)` of them and O owning `floor(k / 2)`.
pub struct TurnParityInvariant;

impl Invariant<GameSession> for TurnParityInvariant {
    fn holds(session: &GameSession) -> bool {
        session.history().entries().iter().all(|entry| {
            let ply = entry.ply();
            entry.board().count_of(Player::X) == ply.div_ceil(2)
                && entry.board().count_of(Player::O) == ply / 2
        })
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_new_session_holds() {
        let session = GameSession::new();
        assert!(TurnParityInvariant::holds(&session));
        assert_eq!(session.current_player(), Player::X);
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let (session, _) = GameSession::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
            Position::BottomLeft,
            Position::BottomRight,
        ]);
        assert!(TurnParityInvariant::holds(&session));
        assert_eq!(session.current_player(), Player::O);
    }
}
