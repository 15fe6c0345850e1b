//! Command-line interface for gridmark.

use clap::{Parser, Subcommand};
use gridmark_engine::{BoardSize, SizeError};
use std::path::PathBuf;
use tracing::instrument;

/// gridmark - two-player N×N tic-tac-toe
#[derive(Parser, Debug)]
#[command(name = "gridmark")]
#[command(about = "Two-player tic-tac-toe on boards from 2x2 to 10x10", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "gridmark.toml")]
    pub config: PathBuf,

    /// Front end to run (defaults to the console)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Board size for the console game; asked interactively if absent
    pub size: Option<String>,
}

/// Available front ends
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the console, one typed move at a time
    Console {
        /// Board size; asked interactively if absent
        size: Option<String>,
    },

    /// Play in a full-screen terminal window with mouse and keyboard
    Window {
        /// Initial board size
        size: Option<String>,
    },
}

/// Interprets a command-line board size.
///
/// Anything that is not all digits is ignored (`Ok(None)`), so the caller
/// falls back to its default. Digits outside the supported range are an
/// error.
#[instrument]
pub fn parse_size_arg(arg: Option<&str>) -> Result<Option<BoardSize>, SizeError> {
    let Some(arg) = arg.filter(|a| !a.is_empty() && a.bytes().all(|b| b.is_ascii_digit())) else {
        return Ok(None);
    };
    let size = arg.parse::<usize>().unwrap_or(usize::MAX);
    BoardSize::new(size).map(Some)
}
