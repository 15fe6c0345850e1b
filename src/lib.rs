//! gridmark - two-player N×N tic-tac-toe
//!
//! The rules live in [`gridmark_engine`]; this crate adds the two front
//! ends that drive it.
//!
//! # Architecture
//!
//! - **Console**: typed `x, y` coordinates, boards printed as text
//! - **Window**: full-screen board played with the mouse or arrow keys
//! - **Config**: TOML defaults for board size, colors, and logging
//!
//! # Example
//!
//! ```no_run
//! use gridmark::{AppConfig, console};
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = AppConfig::load_or_default("gridmark.toml")?;
//! console::run(&config, None)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod console;
pub mod logging;
pub mod window;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, ConsoleSettings, LogSettings};
