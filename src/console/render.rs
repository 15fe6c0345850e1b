//! Console board printing.

use super::colors::ColorStack;
use crate::config::ConsoleSettings;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use gridmark_engine::{Color, Coord, Game};
use std::io::{self, Write};
use tracing::instrument;

/// Prints boards as text, e.g. for a 3×3 board:
///
/// ```text
///      1   2   3
///   1  X |   | O
///     ---+---+---
///   2    | X |
///     ---+---+---
///   3    |   | O
/// ```
#[derive(Debug, Clone)]
pub struct BoardRenderer {
    settings: ConsoleSettings,
    colors: ColorStack,
}

impl BoardRenderer {
    /// Creates a renderer with its own color stack.
    pub fn new(settings: ConsoleSettings) -> Self {
        Self {
            settings,
            colors: ColorStack::new(),
        }
    }

    /// Returns true if color output is enabled.
    pub fn colorize(&self) -> bool {
        *self.settings.colorize()
    }

    /// Prints the board, in the current player's color when `colorize` is set
    /// and enabled in the settings.
    #[instrument(skip(self, out, game), fields(size = %game.size(), moves = game.move_count()))]
    pub fn render(&mut self, out: &mut impl Write, game: &Game, colorize: bool) -> io::Result<()> {
        let colorize = colorize && self.colorize();

        if *self.settings.clear_screen() {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }

        if colorize {
            self.colors.push_foreground(out, game.current_player_color())?;
        }

        let n = game.size().get();
        let highlight = colorize && *self.settings.highlight_last_move();

        write!(out, "    ")?;
        for column in 0..n {
            write!(out, " {:<2} ", column + 1)?;
        }
        writeln!(out)?;

        for (row, squares) in game.board().rows().enumerate() {
            write!(out, " {:>2} ", row + 1)?;
            for (column, square) in squares.iter().enumerate() {
                if column > 0 {
                    write!(out, "|")?;
                }
                let is_last = game.last_move() == Some(coord(column, row));
                if highlight && is_last {
                    self.colors.push_background(out, Color::White)?;
                    write!(out, " {} ", square.mark())?;
                    self.colors.revert_background(out)?;
                } else {
                    write!(out, " {} ", square.mark())?;
                }
            }
            writeln!(out)?;

            if row + 1 < n {
                writeln!(out, "    {}", vec!["---"; n].join("+"))?;
            }
        }

        if colorize {
            self.colors.revert_foreground(out)?;
        }
        out.flush()
    }

    /// Switches the foreground to `color` for the text that follows.
    pub fn set_foreground(&mut self, out: &mut impl Write, color: Color) -> io::Result<()> {
        if self.colorize() {
            self.colors.push_foreground(out, color)?;
        }
        Ok(())
    }

    /// Drops every pushed color.
    pub fn reset_colors(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.colorize() {
            self.colors.reset(out)?;
        }
        out.flush()
    }
}

// Board indices never exceed BoardSize::MAX.
fn coord(column: usize, row: usize) -> Coord {
    Coord::new(column as i32, row as i32)
}
