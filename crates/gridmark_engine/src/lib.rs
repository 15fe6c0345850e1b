//! Pure game logic for two-player N×N tic-tac-toe.
//!
//! Boards range from 2×2 to 10×10. A player wins by filling a complete row,
//! column or diagonal; a full board with no complete line is a tie.
//!
//! # Example
//!
//! ```
//! use gridmark_engine::{BoardSize, Coord, Game, MoveResult, Player};
//!
//! let mut game = Game::new(BoardSize::new(3)?);
//! for (column, row) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     assert_eq!(game.apply_move(Coord::new(column, row)), MoveResult::Accepted);
//! }
//! assert_eq!(game.winner(), Some(Player::X));
//! assert_eq!(game.apply_move(Coord::new(2, 2)), MoveResult::AlreadyWon);
//! # Ok::<(), gridmark_engine::SizeError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod geometry;
pub mod invariants;
pub mod rules;
mod types;

pub use board::Board;
pub use error::SizeError;
pub use game::Game;
pub use geometry::{WinEdge, WinLine};
pub use rules::win::Win;
pub use types::{BoardSize, Color, Coord, MoveResult, Player, PlayerColors, Square};
