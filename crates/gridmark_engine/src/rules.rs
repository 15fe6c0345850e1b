//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine's mutable state so invariants and tests can use them directly.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::find_winner;
