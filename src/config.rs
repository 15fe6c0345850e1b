//! Application configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use gridmark_engine::{BoardSize, Color, PlayerColors};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Board size used when none is given on the command line.
    default_size: usize,

    /// Colors of X and O, in that order.
    player_colors: [Color; 2],

    /// Console front end settings.
    console: ConsoleSettings,

    /// Log output settings.
    log: LogSettings,
}

/// Console front end settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleSettings {
    /// Clear the terminal before drawing each board.
    clear_screen: bool,

    /// Draw the board in the current player's color.
    colorize: bool,

    /// Highlight the square of the last move.
    highlight_last_move: bool,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            clear_screen: true,
            colorize: true,
            highlight_last_move: true,
        }
    }
}

impl ConsoleSettings {
    /// Settings for plain, uncolored output (scripts and tests).
    pub fn plain() -> Self {
        Self {
            clear_screen: false,
            colorize: false,
            highlight_last_move: false,
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// File receiving log output; the terminal itself is never logged to.
    file: String,

    /// Filter used when `RUST_LOG` is not set.
    filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: "gridmark.log".to_string(),
            filter: "info".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let colors = PlayerColors::default();
        Self {
            default_size: BoardSize::default().get(),
            player_colors: [colors.x, colors.o],
            console: ConsoleSettings::default(),
            log: LogSettings::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(default_size = config.default_size, "Config loaded successfully");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration, falling back to defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            warn!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validates configuration values.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.board_size()?;
        if self.player_colors[0] == self.player_colors[1] {
            return Err(ConfigError::new(format!(
                "player_colors must differ, both are {}",
                self.player_colors[0]
            )));
        }
        Ok(())
    }

    /// Returns the validated default board size.
    #[track_caller]
    pub fn board_size(&self) -> Result<BoardSize, ConfigError> {
        BoardSize::new(self.default_size)
            .map_err(|e| ConfigError::new(format!("default_size: {}", e)))
    }

    /// Returns the configured player colors.
    pub fn colors(&self) -> PlayerColors {
        PlayerColors::new(self.player_colors[0], self.player_colors[1])
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
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
