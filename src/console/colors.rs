//! Foreground/background color stack for console output.
//!
//! Each renderer owns its own stack. Reverting returns to the previously
//! pushed color; the terminal's default color sits beneath every stack and
//! is never popped.

use crossterm::queue;
use crossterm::style::{self, ResetColor, SetBackgroundColor, SetForegroundColor};
use gridmark_engine::Color;
use std::io::{self, Write};
use tracing::{instrument, trace};

/// Maps an engine color onto the standard ANSI palette.
pub fn to_terminal(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::White => style::Color::Grey,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Blue => style::Color::DarkBlue,
        Color::Yellow => style::Color::DarkYellow,
    }
}

/// Stacks of the foreground and background colors in effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorStack {
    foreground: Vec<Color>,
    background: Vec<Color>,
}

impl ColorStack {
    /// Creates a stack sitting on the terminal defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the foreground in effect, `None` for the terminal default.
    pub fn foreground(&self) -> Option<Color> {
        self.foreground.last().copied()
    }

    /// Returns the background in effect, `None` for the terminal default.
    pub fn background(&self) -> Option<Color> {
        self.background.last().copied()
    }

    /// Sets the foreground color and remembers it.
    #[instrument(skip(self, out))]
    pub fn push_foreground(&mut self, out: &mut impl Write, color: Color) -> io::Result<()> {
        self.foreground.push(color);
        queue!(out, SetForegroundColor(to_terminal(color)))
    }

    /// Sets the background color and remembers it.
    #[instrument(skip(self, out))]
    pub fn push_background(&mut self, out: &mut impl Write, color: Color) -> io::Result<()> {
        self.background.push(color);
        queue!(out, SetBackgroundColor(to_terminal(color)))
    }

    /// Returns to the foreground in effect before the last push.
    #[instrument(skip(self, out))]
    pub fn revert_foreground(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.foreground.pop().is_none() {
            trace!("Foreground already at terminal default");
        }
        let color = self.foreground().map_or(style::Color::Reset, to_terminal);
        queue!(out, SetForegroundColor(color))
    }

    /// Returns to the background in effect before the last push.
    #[instrument(skip(self, out))]
    pub fn revert_background(&mut self, out: &mut impl Write) -> io::Result<()> {
        if self.background.pop().is_none() {
            trace!("Background already at terminal default");
        }
        let color = self.background().map_or(style::Color::Reset, to_terminal);
        queue!(out, SetBackgroundColor(color))
    }

    /// Drops every pushed color and restores the terminal defaults.
    #[instrument(skip(self, out))]
    pub fn reset(&mut self, out: &mut impl Write) -> io::Result<()> {
        self.foreground.clear();
        self.background.clear();
        queue!(out, ResetColor)
    }
}
