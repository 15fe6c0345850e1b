//! Core domain types for N×N tic-tac-toe.

use crate::error::SizeError;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the marker character drawn for this player.
    pub fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Unplayed square (the neutral marker).
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns the character drawn for this square (a space when empty).
    pub fn mark(self) -> char {
        self.player().map_or(' ', Player::mark)
    }
}

/// Display colors a player can be associated with.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Color {
    /// Black.
    Black,
    /// White.
    White,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Blue.
    Blue,
    /// Yellow.
    Yellow,
}

impl TryFrom<String> for Color {
    type Error = strum::ParseError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

/// Colors assigned to each player for the lifetime of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct PlayerColors {
    /// Color of player X.
    pub x: Color,
    /// Color of player O.
    pub o: Color,
}

impl PlayerColors {
    /// Returns the color of the given player.
    pub fn of(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for PlayerColors {
    fn default() -> Self {
        Self {
            x: Color::Green,
            o: Color::Yellow,
        }
    }
}

/// Zero-based board coordinate as `(column, row)`.
///
/// Coordinates are signed so that input falling off the board on either
/// side can still be handed to the engine, which rejects it with
/// [`MoveResult::OutOfRange`](crate::MoveResult::OutOfRange).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Coord {
    /// Column, counted from the left edge.
    pub column: i32,
    /// Row, counted from the top edge.
    pub row: i32,
}

impl Coord {
    /// Converts 1-based user coordinates into a zero-based coordinate.
    ///
    /// Values too large for the coordinate space saturate, so they still
    /// land outside any board.
    #[instrument]
    pub fn from_one_based(column: u64, row: u64) -> Self {
        let shift = |value: u64| i32::try_from(value).map_or(i32::MAX, |v| v - 1);
        Self {
            column: shift(column),
            row: shift(row),
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// Validated board size N for an N×N board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "usize", into = "usize")]
pub struct BoardSize(usize);

impl BoardSize {
    /// Smallest supported board.
    pub const MIN: usize = 2;
    /// Largest supported board.
    pub const MAX: usize = 10;

    /// Validates a raw size.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError`] when `size` is outside `[MIN, MAX]`.
    #[track_caller]
    #[instrument]
    pub fn new(size: usize) -> Result<Self, SizeError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(SizeError::new(size))
        }
    }

    /// Returns N.
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the number of squares, N².
    pub fn squares(self) -> usize {
        self.0 * self.0
    }

    /// Returns the size one larger, or `self` at the maximum.
    pub fn larger(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    /// Returns the size one smaller, or `self` at the minimum.
    pub fn smaller(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::MIN))
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self(3)
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = SizeError;

    #[track_caller]
    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// Outcome of a move attempt.
///
/// Rejections are ordinary values the caller is expected to act on
/// (usually by re-prompting); none of them is a failure of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum MoveResult {
    /// The move was applied.
    #[display("Move accepted")]
    Accepted,
    /// The coordinate is outside the board.
    #[display("The given move was outside the bounds of the board")]
    OutOfRange,
    /// The target square is already occupied.
    #[display("The given move has already been played")]
    CellTaken,
    /// The game already has a winner.
    #[display("The game has already been won")]
    AlreadyWon,
}

impl MoveResult {
    /// Returns true if the move was applied.
    pub fn is_accepted(self) -> bool {
        self == MoveResult::Accepted
    }
}
