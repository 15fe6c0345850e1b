//! gridmark - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use gridmark::cli::{Cli, Command, parse_size_arg};
use gridmark::{AppConfig, console, logging, window};
use gridmark_engine::BoardSize;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // Logging is configured by the file, so loading it is not logged.
    let config = AppConfig::load_or_default(&cli.config)?;
    logging::init(config.log())?;

    info!(config = %cli.config.display(), "Starting gridmark");
    if !cli.config.exists() {
        warn!(config = %cli.config.display(), "Config file not found, using defaults");
    }

    match cli.command {
        Some(Command::Window { size }) => {
            let size = match command_line_size(size.as_deref()) {
                Some(size) => size,
                None => config.board_size()?,
            };
            window::run(size, config.colors())
        }
        Some(Command::Console { size }) => console::run(&config, command_line_size(size.as_deref())),
        None => console::run(&config, command_line_size(cli.size.as_deref())),
    }
}

/// Reads the size argument, reporting an unsupported one and ignoring it.
fn command_line_size(arg: Option<&str>) -> Option<BoardSize> {
    match parse_size_arg(arg) {
        Ok(size) => size,
        Err(e) => {
            warn!(error = %e, "Ignoring board size argument");
            eprintln!(
                "Board size must be between {} and {} (inclusive); ignoring {}",
                BoardSize::MIN,
                BoardSize::MAX,
                arg.unwrap_or_default()
            );
            None
        }
    }
}
