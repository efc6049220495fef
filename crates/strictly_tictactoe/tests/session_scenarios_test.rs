//! Scenario tests for game sessions: moves, wins, draws and time travel.

use strictly_tictactoe::{
    GameSession, InvariantSet, MoveOutcome, Outcome, Player, Position, Rejection, SessionError,
    SessionInvariants, Square,
};
use proptest::prelude::*;

fn positions(indices: &[usize]) -> Vec<Position> {
    indices
        .iter()
        .map(|&i| Position::from_index(i).expect("index on board"))
        .collect()
}

fn play(indices: &[usize]) -> GameSession {
    let (session, ignored) = GameSession::replay(positions(indices));
    assert_eq!(ignored, 0, "every scripted move should apply");
    session
}

#[test]
fn test_first_move_on_empty_board() {
    let mut session = GameSession::new();
    assert_eq!(session.apply_move(Position::TopLeft), MoveOutcome::Applied { ply: 1 });

    let view = session.current_view();
    assert_eq!(view.board().get(Position::TopLeft), Square::Occupied(Player::X));
    assert_eq!(view.current_player(), Player::O);
    assert_eq!(view.outcome(), Outcome::InProgress);
    assert_eq!(view.status_line(), "Next player: O");
}

#[test]
fn test_top_row_win() {
    let session = play(&[0, 4, 1, 5, 2]);

    let view = session.current_view();
    assert_eq!(view.current_step(), 5);
    assert_eq!(view.outcome().winner(), Some(Player::X));
    assert_eq!(view.winning_line().map(|l| l.indices()), Some([0, 1, 2]));
    assert_eq!(view.status_line(), "Winner: X");
    assert!(view.is_highlighted(Position::TopCenter));
    assert!(!view.is_highlighted(Position::Center));
}

#[test]
fn test_full_board_is_draw_and_rejects_moves() {
    // X O X / O O X / X X O
    let mut session = play(&[0, 1, 2, 4, 5, 3, 6, 8, 7]);
    assert_eq!(session.current_step(), 9);
    assert_eq!(session.outcome(), Outcome::Draw);
    assert_eq!(session.current_view().status_line(), "Draw");

    let before = session.clone();
    for pos in Position::ALL {
        assert_eq!(session.apply_move(pos), MoveOutcome::Ignored(Rejection::GameDecided));
    }
    assert_eq!(session, before);
}

#[test]
fn test_branch_after_win_truncates_history() {
    let mut session = play(&[0, 4, 1, 5, 2]);
    assert_eq!(session.history().len(), 6);

    session.jump_to(3).unwrap();
    assert_eq!(session.history().len(), 6, "jumping never truncates");
    assert_eq!(session.current_player(), Player::O);

    assert_eq!(session.apply_move(Position::BottomLeft), MoveOutcome::Applied { ply: 4 });
    assert_eq!(session.history().len(), 5);
    assert_eq!(session.current_step(), 4);
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(session.history().last().position(), Some(Position::BottomLeft));
    assert!(
        session
            .history()
            .entries()
            .iter()
            .all(|e| e.position() != Some(Position::MiddleRight)),
        "entries from the discarded branch are gone"
    );
}

#[test]
fn test_moves_after_win_are_ignored() {
    let mut session = play(&[0, 4, 1, 5, 2]);
    let before = session.clone();

    for _ in 0..3 {
        assert_eq!(
            session.apply_move(Position::BottomRight),
            MoveOutcome::Ignored(Rejection::GameDecided)
        );
    }
    assert_eq!(session, before);
}

#[test]
fn test_occupied_square_is_a_repeatable_no_op() {
    let mut session = play(&[4, 0]);
    let before = session.clone();

    for pos in [Position::Center, Position::TopLeft, Position::Center] {
        assert_eq!(session.apply_move(pos), MoveOutcome::Ignored(Rejection::CellOccupied(pos)));
    }
    assert_eq!(session, before);
}

#[test]
fn test_jump_out_of_range_is_an_error() {
    let mut session = play(&[4, 0]);
    assert_eq!(
        session.jump_to(3),
        Err(SessionError::OutOfRange { step: 3, len: 3 })
    );
    assert_eq!(session.current_step(), 2);
    assert!(session.jump_to(2).is_ok());
    assert!(session.jump_to(0).is_ok());
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_jump_to_latest_matches_view_after_last_move() {
    let mut session = play(&[4, 0, 8, 2]);
    let expected = session.current_view();

    session.jump_to(1).unwrap();
    assert_ne!(session.current_view(), expected);

    session.jump_to(session.history().len() - 1).unwrap();
    assert_eq!(session.current_view(), expected);
}

#[test]
fn test_jump_into_won_position_and_back() {
    let mut session = play(&[0, 4, 1, 5, 2]);
    session.jump_to(4).unwrap();
    assert_eq!(session.outcome(), Outcome::InProgress);
    session.jump_to(5).unwrap();
    assert_eq!(session.outcome().winner(), Some(Player::X));
}

/// A user action against a session.
#[derive(Debug, Clone, Copy)]
enum Action {
    /// Jump to `step % history.len()`.
    Jump(usize),
    /// Place a mark at the cell with this index.
    Place(usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => (0..10usize).prop_map(Action::Jump),
        3 => (0..9usize).prop_map(Action::Place),
    ]
}

proptest! {
    #[test]
    fn test_random_sessions_keep_invariants(actions in prop::collection::vec(action(), 0..60)) {
        let mut session = GameSession::new();

        for action in actions {
            let len_before = session.history().len();
            let step = session.current_step();
            match action {
                Action::Jump(target) => {
                    session.jump_to(target % len_before).unwrap();
                    prop_assert_eq!(session.history().len(), len_before);
                }
                Action::Place(index) => {
                    let pos = Position::ALL[index];
                    match session.apply_move(pos) {
                        MoveOutcome::Applied { ply } => {
                            prop_assert_eq!(ply, step + 1);
                            prop_assert_eq!(session.history().len(), step + 2);
                        }
                        MoveOutcome::Ignored(_) => {
                            prop_assert_eq!(session.history().len(), len_before);
                            prop_assert_eq!(session.current_step(), step);
                        }
                    }
                }
            }

            let expected = if session.current_step() % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(session.current_player(), expected);
            prop_assert!(SessionInvariants::check_all(&session).is_ok());
        }
    }
}
