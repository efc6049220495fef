//! Driver configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use strictly_tictactoe::MoveOrder;
use tracing::{debug, info, instrument};

/// Environment variable naming a config file.
pub const CONFIG_ENV: &str = "STRICTLY_REWIND_CONFIG";

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_rewind.toml";

/// Presentation settings for the terminal driver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct RewindConfig {
    /// Initial order of the move list.
    #[serde(default)]
    #[getter(copy)]
    move_order: MoveOrder,

    /// Print row/column coordinates next to the board.
    #[serde(default = "default_show_coordinates")]
    #[getter(copy)]
    show_coordinates: bool,

    /// Emit views as JSON instead of text.
    #[serde(default)]
    #[getter(copy)]
    json: bool,
}

fn default_show_coordinates() -> bool {
    true
}

impl Default for RewindConfig {
    fn default() -> Self {
        Self {
            move_order: MoveOrder::default(),
            show_coordinates: default_show_coordinates(),
            json: false,
        }
    }
}

impl RewindConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(move_order = %config.move_order, "Config loaded");
        Ok(config)
    }

    /// Resolves the config to use.
    ///
    /// An explicit path (argument, then `STRICTLY_REWIND_CONFIG`) must exist.
    /// Otherwise `strictly_rewind.toml` is read if present, else defaults.
    #[instrument]
    pub fn load(explicit: Option<PathBuf>) -> Result<Self, ConfigError> {
        let explicit = explicit.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            Self::from_file(fallback)
        } else {
            debug!("No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Overrides the initial move order.
    pub fn with_move_order(mut self, move_order: MoveOrder) -> Self {
        self.move_order = move_order;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
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
