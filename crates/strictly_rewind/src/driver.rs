//! Interactive presentation layer over a [`GameSession`].

use crate::command::{Command, HELP, InputError, cell_position};
use crate::config::RewindConfig;
use crate::render::{render_json, render_view};
use derive_more::{Display, Error, From};
use std::io::{BufRead, Write};
use strictly_tictactoe::{GameSession, MoveOutcome, SessionError};
use tracing::{debug, info, instrument, warn};

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Print the message and keep prompting.
    Continue(String),
    /// Leave the loop.
    Quit,
}

/// Owns one session and translates commands into session calls.
#[derive(Debug)]
pub struct Driver {
    session: GameSession,
    config: RewindConfig,
}

impl Driver {
    /// Creates a driver with a fresh session.
    #[instrument(skip(config))]
    pub fn new(config: RewindConfig) -> Self {
        Self {
            session: GameSession::with_move_order(config.move_order()),
            config,
        }
    }

    /// Builds a driver by playing 1-based `cells` in order, then jumping to
    /// `jump` if given. Returns the driver and the number of ignored moves.
    ///
    /// The move list order comes from `config`.
    #[instrument(skip(config))]
    pub fn replay(
        config: RewindConfig,
        cells: &[usize],
        jump: Option<usize>,
    ) -> Result<(Self, usize), ReplayError> {
        let positions = cells
            .iter()
            .map(|&cell| cell_position(cell))
            .collect::<Result<Vec<_>, _>>()?;

        let (mut session, ignored) = GameSession::replay(positions);
        if ignored > 0 {
            warn!(ignored, "Some moves were ignored");
        }
        if session.move_order() != config.move_order() {
            session.toggle_move_order();
        }
        if let Some(step) = jump {
            session.jump_to(step)?;
        }

        info!(step = session.current_step(), "Replay finished");
        Ok((Self { session, config }, ignored))
    }

    /// The session being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Renders the current view per the config.
    pub fn render(&self) -> String {
        let view = self.session.current_view();
        if self.config.json() {
            match render_json(&view) {
                Ok(json) => return json,
                Err(e) => warn!(error = %e, "JSON rendering failed, falling back to text"),
            }
        }
        render_view(&view, &self.config)
    }

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: Command) -> Step {
        match command {
            Command::Place(pos) => match self.session.apply_move(pos) {
                MoveOutcome::Applied { ply } => {
                    debug!(ply, "Placed mark");
                    Step::Continue(self.render())
                }
                MoveOutcome::Ignored(rejection) => Step::Continue(format!("{}.", rejection)),
            },
            Command::Jump(step) => match self.session.jump_to(step) {
                Ok(()) => Step::Continue(self.render()),
                Err(e) => Step::Continue(format!("{}.", e)),
            },
            Command::Reverse => {
                self.session.toggle_move_order();
                Step::Continue(self.render())
            }
            Command::Restart => {
                self.session.restart();
                Step::Continue(self.render())
            }
            Command::Help => Step::Continue(HELP.to_string()),
            Command::Quit => Step::Quit,
        }
    }

    /// Runs the prompt loop until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> std::io::Result<()> {
        info!("Starting interactive game");
        writeln!(output, "{}", self.render())?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let message = match Command::parse(&line) {
                Ok(command) => match self.handle(command) {
                    Step::Continue(message) => message,
                    Step::Quit => break,
                },
                Err(e) => format!("{}. Type 'help' for commands.", e.message),
            };
            writeln!(output, "{}", message)?;
        }

        info!(step = self.session.current_step(), "Interactive game finished");
        Ok(())
    }
}

/// Failure to build a position from a move script.
#[derive(Debug, Clone, Display, Error, From)]
pub enum ReplayError {
    /// A cell number outside 1-9.
    #[display("{}", _0)]
    Input(InputError),
    /// The jump target does not exist.
    #[display("{}", _0)]
    Session(SessionError),
}
