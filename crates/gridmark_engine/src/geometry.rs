//! Winning-line geometry used for highlighting.

use crate::types::{BoardSize, Coord};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A complete line on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum WinLine {
    /// A row, counted from the top.
    #[display("row {}", _0)]
    Row(usize),
    /// A column, counted from the left.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl WinLine {
    /// Returns the endpoints of this line on a board of the given size.
    #[instrument]
    pub fn edge(self, size: BoardSize) -> WinEdge {
        let last = to_coord(size.get() - 1);
        match self {
            WinLine::Row(row) => WinEdge::new(Coord::new(0, to_coord(row)), Coord::new(last, to_coord(row))),
            WinLine::Column(column) => {
                WinEdge::new(Coord::new(to_coord(column), 0), Coord::new(to_coord(column), last))
            }
            WinLine::MainDiagonal => WinEdge::new(Coord::new(0, 0), Coord::new(last, last)),
            WinLine::AntiDiagonal => WinEdge::new(Coord::new(last, 0), Coord::new(0, last)),
        }
    }
}

// Board indices never exceed BoardSize::MAX.
fn to_coord(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

/// The endpoints of a winning line, e.g. `((0, 0), (2, 2))` for the main
/// diagonal of a 3×3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct WinEdge {
    /// First endpoint.
    pub start: Coord,
    /// Second endpoint.
    pub end: Coord,
}

impl WinEdge {
    /// Iterates over every coordinate from `start` to `end` inclusive.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + use<> {
        let dx = (self.end.column - self.start.column).signum();
        let dy = (self.end.row - self.start.row).signum();
        let steps = (self.end.column - self.start.column)
            .abs()
            .max((self.end.row - self.start.row).abs());
        let start = self.start;
        (0..=steps).map(move |i| Coord::new(start.column + dx * i, start.row + dy * i))
    }

    /// Returns true if `coord` is one of the cells along this edge.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }
}

impl std::fmt::Display for WinEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}
