//! Terminal front end for `strictly_tictactoe`.
//!
//! The driver owns one [`strictly_tictactoe::GameSession`], forwards typed
//! commands to it and re-renders the session's view after every change.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod command;
mod config;
mod driver;
mod render;

pub use command::{Command, HELP, InputError};
pub use config::{CONFIG_ENV, ConfigError, DEFAULT_CONFIG_FILE, RewindConfig};
pub use driver::{Driver, ReplayError, Step};
pub use render::{render_json, render_view};
