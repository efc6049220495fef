//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three positions forming a straight line across the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// The three positions, in board order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Checks whether the line passes through `pos`.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Board indices of the line (0-8).
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }
}

/// Every line on the board, in detection order.
///
/// Rows top to bottom, then columns left to right, then the two diagonals.
/// When one move completes several lines at once, the earliest line here
/// is the one reported.
pub const LINES: [WinLine; 8] = [
    // Rows
    WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    WinLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
    WinLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
    WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Result of scanning a board for three in a row.
///
/// The winner and the line are either both present or both absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Detection(Option<(Player, WinLine)>);

impl Detection {
    /// The player holding a completed line.
    pub fn winner(&self) -> Option<Player> {
        self.0.map(|(player, _)| player)
    }

    /// The completed line.
    pub fn line(&self) -> Option<WinLine> {
        self.0.map(|(_, line)| line)
    }

    /// Returns `(winner, line)` when a line is complete.
    pub fn into_inner(self) -> Option<(Player, WinLine)> {
        self.0
    }
}

/// Scans the board for the first completed line.
#[instrument(skip(board))]
pub fn detect(board: &Board) -> Detection {
    for line in LINES {
        let [a, b, c] = line.positions();
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Detection(Some((player, line)));
        }
    }

    Detection(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(Position, Player)]) -> Board {
        let mut board = Board::new();
        for &(pos, player) in marks {
            board.set(pos, Square::Occupied(player));
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(detect(&board), Detection::default());
        assert_eq!(detect(&board).winner(), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
        ]);
        let detection = detect(&board);
        assert_eq!(detection.winner(), Some(Player::X));
        assert_eq!(detection.line().map(|l| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Player::O),
            (Position::Center, Player::O),
            (Position::BottomLeft, Player::O),
        ]);
        let detection = detect(&board);
        assert_eq!(detection.winner(), Some(Player::O));
        assert_eq!(detection.line().map(|l| l.indices()), Some([2, 4, 6]));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::O),
        ]);
        assert_eq!(detect(&board).into_inner(), None);
    }

    #[test]
    fn test_row_reported_before_column_and_diagonal() {
        // X completes the top row, left column and main diagonal at once.
        let board = board_with(&[
            (Position::TopLeft, Player::X),
            (Position::TopCenter, Player::X),
            (Position::TopRight, Player::X),
            (Position::MiddleLeft, Player::X),
            (Position::BottomLeft, Player::X),
            (Position::Center, Player::X),
            (Position::BottomRight, Player::X),
        ]);
        assert_eq!(detect(&board).line(), Some(LINES[0]));
    }

    #[test]
    fn test_column_reported_before_diagonal() {
        let board = board_with(&[
            (Position::TopCenter, Player::O),
            (Position::Center, Player::O),
            (Position::BottomCenter, Player::O),
            (Position::TopLeft, Player::O),
            (Position::BottomRight, Player::O),
        ]);
        assert_eq!(detect(&board).line(), Some(LINES[4]));
    }

    #[test]
    fn test_every_line_is_detected() {
        for (i, line) in LINES.iter().enumerate() {
            let marks: Vec<_> = line.positions().iter().map(|&p| (p, Player::O)).collect();
            let detection = detect(&board_with(&marks));
            assert_eq!(detection.line(), Some(LINES[i]));
            assert_eq!(detection.winner(), Some(Player::O));
        }
    }
}
