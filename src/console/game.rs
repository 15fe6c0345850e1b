//! Console game loop.

use super::prompt::{SizeAnswer, parse_coordinate, parse_size, parse_yes_no};
use super::render::BoardRenderer;
use anyhow::Result;
use derive_more::{Display, Error};
use gridmark_engine::{BoardSize, Coord, Game, MoveResult, Player, PlayerColors};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// End of console input reached mid-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Input stream closed")]
pub struct InputClosed;

/// Plays successive console games over any line-based input and output.
pub struct ConsoleGame<R, W> {
    input: R,
    output: W,
    renderer: BoardRenderer,
    colors: PlayerColors,
    size: Option<BoardSize>,
}

impl<R: BufRead, W: Write> ConsoleGame<R, W> {
    /// Creates a console game.
    ///
    /// When `size` is given every game uses it; otherwise the size is asked
    /// before each game.
    pub fn new(
        input: R,
        output: W,
        renderer: BoardRenderer,
        colors: PlayerColors,
        size: Option<BoardSize>,
    ) -> Self {
        Self {
            input,
            output,
            renderer,
            colors,
            size,
        }
    }

    /// Consumes the game, returning the output writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays games until the players decline another one.
    ///
    /// # Errors
    ///
    /// Returns [`InputClosed`] if input ends, or any I/O error.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<()> {
        loop {
            let game = self.play_one()?;
            info!(winner = ?game.winner(), moves = game.move_count(), "Game finished");

            if !self.ask_play_again()? {
                info!("Players declined another game");
                return Ok(());
            }
        }
    }

    /// Plays a single game to completion and returns its final state.
    #[instrument(skip(self))]
    pub fn play_one(&mut self) -> Result<Game> {
        let size = match self.size {
            Some(size) => size,
            None => self.ask_board_size()?,
        };
        let mut game = Game::with_colors(size, self.colors);
        info!(%size, "Starting console game");

        while !game.is_over() {
            self.renderer.render(&mut self.output, &game, true)?;

            loop {
                let coord = self.ask_for_move(game.current_player())?;
                match game.apply_move(coord) {
                    MoveResult::Accepted | MoveResult::AlreadyWon => break,
                    MoveResult::OutOfRange => writeln!(
                        self.output,
                        "The given move was outside the bounds of the board. Please try again."
                    )?,
                    MoveResult::CellTaken => writeln!(
                        self.output,
                        "The given move has already been played. Please try again."
                    )?,
                }
            }
        }

        match game.winner() {
            Some(winner) => {
                self.renderer.render(&mut self.output, &game, true)?;
                self.renderer.set_foreground(&mut self.output, game.player_color(winner))?;
                writeln!(self.output, "Congratulations Player {}! You Won!", winner)?;
            }
            None => {
                self.renderer.reset_colors(&mut self.output)?;
                self.renderer.render(&mut self.output, &game, false)?;
                writeln!(self.output, "Oh no! It was a tie!")?;
            }
        }
        self.renderer.reset_colors(&mut self.output)?;

        Ok(game)
    }

    /// Reads one line, without its line terminator.
    fn read_line(&mut self) -> Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            warn!("Console input closed");
            return Err(InputClosed.into());
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    fn prompt(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks for a board size until a supported one is given.
    #[instrument(skip(self))]
    pub fn ask_board_size(&mut self) -> Result<BoardSize> {
        loop {
            let answer = self.prompt("How big would you like your board to be ([2, 10])? ")?;
            match parse_size(&answer) {
                SizeAnswer::Size(size) => return Ok(size),
                SizeAnswer::NotANumber => writeln!(
                    self.output,
                    "\nThe entered value {} is not a number. Please enter a number",
                    answer.trim()
                )?,
                SizeAnswer::OutOfBounds => writeln!(
                    self.output,
                    "\nThe given value is outside the bounds. Must be between {} and {} (inclusive)",
                    BoardSize::MIN,
                    BoardSize::MAX
                )?,
            }
        }
    }

    /// Asks `player` for a coordinate until one parses.
    #[instrument(skip(self))]
    pub fn ask_for_move(&mut self, player: Player) -> Result<Coord> {
        loop {
            let answer = self.prompt(&format!(
                "Player {} - Enter the coordinate to play your move: ",
                player
            ))?;
            match parse_coordinate(&answer) {
                Some(coord) => {
                    debug!(%coord, "Parsed move");
                    return Ok(coord);
                }
                None => writeln!(
                    self.output,
                    "\nInvalid coordinate given. Please enter the coordinate in the format x, y."
                )?,
            }
        }
    }

    /// Asks whether to play again until a yes or no is given.
    #[instrument(skip(self))]
    pub fn ask_play_again(&mut self) -> Result<bool> {
        loop {
            let answer = self.prompt("Do you want to play another game (y/n)? ")?;
            match parse_yes_no(&answer) {
                Some(again) => return Ok(again),
                None => writeln!(self.output, "Invalid answer given")?,
            }
        }
    }
}
