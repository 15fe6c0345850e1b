//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use gridmark_engine::{BoardSize, Coord};

/// Moves the cursor one cell for an arrow key, stopping at the board edge.
pub fn move_cursor(cursor: Coord, key: KeyCode, size: BoardSize) -> Coord {
    let last = size.get() as i32 - 1;
    let (dx, dy) = match key {
        KeyCode::Left => (-1, 0),
        KeyCode::Right => (1, 0),
        KeyCode::Up => (0, -1),
        KeyCode::Down => (0, 1),
        _ => (0, 0),
    };
    Coord::new(
        (cursor.column + dx).clamp(0, last),
        (cursor.row + dy).clamp(0, last),
    )
}

/// Pulls a cursor left over from a larger board back onto the board.
pub fn clamp_cursor(cursor: Coord, size: BoardSize) -> Coord {
    move_cursor(cursor, KeyCode::Null, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_move_one_cell() {
        let size = BoardSize::new(4).unwrap();
        let center = Coord::new(1, 1);
        assert_eq!(move_cursor(center, KeyCode::Right, size), Coord::new(2, 1));
        assert_eq!(move_cursor(center, KeyCode::Left, size), Coord::new(0, 1));
        assert_eq!(move_cursor(center, KeyCode::Up, size), Coord::new(1, 0));
        assert_eq!(move_cursor(center, KeyCode::Down, size), Coord::new(1, 2));
        assert_eq!(move_cursor(center, KeyCode::Char('x'), size), center);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        let size = BoardSize::new(2).unwrap();
        assert_eq!(move_cursor(Coord::new(1, 1), KeyCode::Right, size), Coord::new(1, 1));
        assert_eq!(move_cursor(Coord::new(0, 0), KeyCode::Up, size), Coord::new(0, 0));
        assert_eq!(clamp_cursor(Coord::new(8, 5), size), Coord::new(1, 1));
    }
}
