//! Text rendering of a [`GameView`].

use crate::config::RewindConfig;
use strictly_tictactoe::{GameView, Position, Square};

/// Renders the board, status line and move list.
///
/// Winning squares are bracketed, e.g. `[X]`. The current move list entry
/// is marked with `>`.
pub fn render_view(view: &GameView, config: &RewindConfig) -> String {
    let mut out = String::new();

    if config.show_coordinates() {
        out.push_str("     1   2   3\n");
    }
    for row in 0..3 {
        if config.show_coordinates() {
            out.push_str(&format!("{}  ", row + 1));
        }
        let cells: Vec<String> = Position::ALL[row * 3..row * 3 + 3]
            .iter()
            .map(|&pos| render_cell(view, pos))
            .collect();
        out.push_str(&cells.join("|"));
        out.push('\n');
        if row < 2 {
            if config.show_coordinates() {
                out.push_str("   ");
            }
            out.push_str("---+---+---\n");
        }
    }

    out.push('\n');
    out.push_str(&view.status_line());
    out.push_str("\n\n");

    for item in view.history() {
        let marker = if item.is_current() { '>' } else { ' ' };
        out.push_str(&format!("{} {:>2}. {}\n", marker, item.step(), item.label()));
    }
    out
}

fn render_cell(view: &GameView, pos: Position) -> String {
    let symbol = match view.board().get(pos) {
        Square::Empty => " ".to_string(),
        Square::Occupied(player) => player.to_string(),
    };
    if view.is_highlighted(pos) {
        format!("[{}]", symbol)
    } else {
        format!(" {} ", symbol)
    }
}

/// Renders the view as pretty JSON.
pub fn render_json(view: &GameView) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::GameSession;

    fn plain() -> RewindConfig {
        toml::from_str("show_coordinates = false").unwrap()
    }

    #[test]
    fn test_render_empty_board() {
        let text = render_view(&GameSession::new().current_view(), &plain());
        assert!(text.starts_with("   |   |   \n---+---+---\n"));
        assert!(text.contains("Next player: X"));
        assert!(text.contains(">  0. Go to game start"));
    }

    #[test]
    fn test_render_highlights_winning_line() {
        let (session, _) = GameSession::replay([
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
            Position::TopRight,
        ]);
        let text = render_view(&session.current_view(), &plain());
        assert!(text.starts_with("[X]|[X]|[X]\n"));
        assert!(text.contains(" O "));
        assert!(text.contains("Winner: X"));
    }
}
