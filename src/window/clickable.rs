//! Clickable board cells.
//!
//! A rendered cell reports its board coordinate to a [`CellClickHandler`].
//! The mapping from screen positions to coordinates is rebuilt every frame,
//! so handlers never see terminal types.

use derive_new::new;
use gridmark_engine::Coord;
use ratatui::layout::Rect;
use tracing::{debug, instrument};

/// Receives the coordinate of a clicked cell.
pub trait CellClickHandler {
    /// Called when the cell at `coord` is clicked.
    fn cell_clicked(&mut self, coord: Coord);
}

/// A board cell occupying a screen area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct ClickableCell {
    /// Screen area of the cell.
    pub area: Rect,
    /// Board coordinate of the cell.
    pub coord: Coord,
}

impl ClickableCell {
    /// Returns true if the screen position lies inside the cell.
    pub fn hit(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}

/// The clickable cells of one rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CellHitMap {
    cells: Vec<ClickableCell>,
}

impl CellHitMap {
    /// Registers a rendered cell.
    pub fn push(&mut self, cell: ClickableCell) {
        self.cells.push(cell);
    }

    /// Returns the registered cells.
    pub fn cells(&self) -> &[ClickableCell] {
        &self.cells
    }

    /// Returns the coordinate of the cell under a screen position.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Coord> {
        self.cells
            .iter()
            .find(|cell| cell.hit(column, row))
            .map(|cell| cell.coord)
    }

    /// Reports a click at a screen position to `handler`.
    ///
    /// Returns false when the click missed every cell.
    #[instrument(skip(self, handler))]
    pub fn dispatch(&self, column: u16, row: u16, handler: &mut impl CellClickHandler) -> bool {
        match self.cell_at(column, row) {
            Some(coord) => {
                debug!(%coord, "Cell clicked");
                handler.cell_clicked(coord);
                true
            }
            None => false,
        }
    }
}
