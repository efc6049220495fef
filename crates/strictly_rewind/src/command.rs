//! Parsing of interactive input lines.

use derive_more::{Display, Error};
use strictly_tictactoe::Position;
use tracing::instrument;

/// A request typed at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the current player's mark.
    Place(Position),
    /// Jump to a history step.
    Jump(usize),
    /// Flip the move list order.
    Reverse,
    /// Start a fresh game.
    Restart,
    /// Show the command summary.
    Help,
    /// Leave the game.
    Quit,
}

/// Command summary printed by `help`.
pub const HELP: &str = "\
Commands:
  1-9 | <cell name>  place a mark (cells numbered left to right, top to bottom)
  jump <step>       show the board after <step> moves (0 = game start)
  reverse           flip the move list order
  restart           start a new game
  help              show this message
  quit              leave";

impl Command {
    /// Parses one input line.
    #[instrument]
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Err(InputError::new("Empty input"));
        };
        let rest: Vec<&str> = words.collect();

        match head.to_lowercase().as_str() {
            "jump" | "j" | "goto" => {
                let [step] = rest.as_slice() else {
                    return Err(InputError::new("Usage: jump <step>"));
                };
                step.parse::<usize>()
                    .map(Command::Jump)
                    .map_err(|_| InputError::new(format!("Invalid step: {}", step)))
            }
            "reverse" | "r" => Ok(Command::Reverse),
            "restart" => Ok(Command::Restart),
            "help" | "h" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            _ => parse_cell(line.trim()).map(Command::Place),
        }
    }
}

/// Converts a 1-based cell number to a position.
#[track_caller]
pub(crate) fn cell_position(cell: usize) -> Result<Position, InputError> {
    cell.checked_sub(1)
        .and_then(Position::from_index)
        .ok_or_else(|| InputError::new(format!("Cell must be 1-9, got {}", cell)))
}

/// Parses a 1-based cell number or a cell name.
fn parse_cell(input: &str) -> Result<Position, InputError> {
    if let Ok(cell) = input.parse::<usize>() {
        return cell_position(cell);
    }
    Position::from_label_or_number(input)
        .ok_or_else(|| InputError::new(format!("Unknown command: {}", input)))
}

/// Input that could not be understood.
#[derive(Debug, Clone, Display, Error)]
#[display("Input error: {}", message)]
pub struct InputError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl InputError {
    /// Creates a new input error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_are_one_based() {
        assert_eq!(Command::parse("1").unwrap(), Command::Place(Position::TopLeft));
        assert_eq!(Command::parse(" 9 ").unwrap(), Command::Place(Position::BottomRight));
        assert!(Command::parse("0").is_err());
        assert!(Command::parse("10").is_err());
    }

    #[test]
    fn test_cell_names() {
        assert_eq!(Command::parse("center").unwrap(), Command::Place(Position::Center));
        assert_eq!(Command::parse("Top-right").unwrap(), Command::Place(Position::TopRight));
    }

    #[test]
    fn test_jump() {
        assert_eq!(Command::parse("jump 3").unwrap(), Command::Jump(3));
        assert_eq!(Command::parse("J 0").unwrap(), Command::Jump(0));
        assert!(Command::parse("jump").is_err());
        assert!(Command::parse("jump x").is_err());
    }

    #[test]
    fn test_keywords() {
        assert_eq!(Command::parse("reverse").unwrap(), Command::Reverse);
        assert_eq!(Command::parse("restart").unwrap(), Command::Restart);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
        assert!(Command::parse("").is_err());
        assert!(Command::parse("dance").is_err());
    }
}
