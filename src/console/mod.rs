//! Console front end: typed coordinates, printed boards.

mod colors;
mod game;
mod prompt;
mod render;

pub use colors::{ColorStack, to_terminal};
pub use game::{ConsoleGame, InputClosed};
pub use prompt::{SizeAnswer, parse_coordinate, parse_size, parse_yes_no};
pub use render::BoardRenderer;

use crate::config::AppConfig;
use anyhow::Result;
use gridmark_engine::BoardSize;
use std::io;
use tracing::{info, instrument};

/// Runs console games on stdin/stdout until the players stop.
///
/// End of input ends the session quietly.
#[instrument(skip(config))]
pub fn run(config: &AppConfig, size: Option<BoardSize>) -> Result<()> {
    let stdin = io::stdin();
    let mut console = ConsoleGame::new(
        stdin.lock(),
        io::stdout(),
        BoardRenderer::new(*config.console()),
        config.colors(),
        size,
    );

    match console.run() {
        Err(e) if e.downcast_ref::<InputClosed>().is_some() => {
            info!("Console session ended by end of input");
            Ok(())
        }
        other => other,
    }
}
