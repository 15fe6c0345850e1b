//! N×N board storage.

use crate::types::{BoardSize, Coord, Player, Square};
use serde::Serialize;
use tracing::instrument;

/// N×N tic-tac-toe board.
///
/// The size is fixed at construction. Only the engine can write squares;
/// callers receive boards as read-only borrows or owned snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Board {
    size: BoardSize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.squares()],
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the row-major index of `coord`, or `None` if it is off the board.
    pub fn index_of(&self, coord: Coord) -> Option<usize> {
        let n = self.size.get();
        let column = usize::try_from(coord.column).ok().filter(|c| *c < n)?;
        let row = usize::try_from(coord.row).ok().filter(|r| *r < n)?;
        Some(row * n + column)
    }

    /// Returns true if `coord` lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        self.index_of(coord).is_some()
    }

    /// Gets the square at `coord`, or `None` if it is off the board.
    pub fn get(&self, coord: Coord) -> Option<Square> {
        self.index_of(coord).map(|i| self.squares[i])
    }

    /// Gets the square at `(column, row)` for in-range indices.
    pub(crate) fn at(&self, column: usize, row: usize) -> Square {
        self.squares[row * self.size.get() + column]
    }

    /// Writes `player`'s marker at a validated index.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        self.squares[index] = Square::Occupied(player);
    }

    /// Checks if a square is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.size.get())
    }

    /// Counts the occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(n: usize) -> Board {
        Board::new(BoardSize::new(n).unwrap())
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board(4);
        assert_eq!(board.squares().len(), 16);
        assert_eq!(board.occupied(), 0);
        assert_eq!(board.rows().count(), 4);
    }

    #[test]
    fn test_index_of_rejects_off_board() {
        let board = board(3);
        assert_eq!(board.index_of(Coord::new(2, 1)), Some(5));
        assert_eq!(board.index_of(Coord::new(3, 0)), None);
        assert_eq!(board.index_of(Coord::new(0, -1)), None);
        assert_eq!(board.get(Coord::new(-1, -1)), None);
    }

    #[test]
    fn test_place_fills_square() {
        let mut board = board(2);
        board.place(1, Player::X);
        board.place(2, Player::O);
        assert_eq!(board.get(Coord::new(1, 0)), Some(Square::Occupied(Player::X)));
        assert!(!board.is_empty(Coord::new(0, 1)));
        assert_eq!(board.occupied(), 2);
    }
}
