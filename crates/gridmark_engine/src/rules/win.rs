//! Win detection logic.
//!
//! The whole board is scanned rows first, then columns, then the main
//! diagonal and the anti-diagonal. The first complete line found is the
//! win; the order only matters when the final move completes several lines
//! at once.

use crate::geometry::WinLine;
use crate::{Board, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Win {
    /// The winning player.
    pub player: Player,
    /// The completed line.
    pub line: WinLine,
}

/// Returns the player owning every square of the line, if one does.
///
/// A line containing any empty square is never owned.
fn line_owner(mut squares: impl Iterator<Item = Square>) -> Option<Player> {
    let first = squares.next()?.player()?;
    squares
        .all(|s| s == Square::Occupied(first))
        .then_some(first)
}

/// Checks if there is a winner on the board.
#[instrument(skip(board), fields(size = %board.size()))]
pub fn find_winner(board: &Board) -> Option<Win> {
    let n = board.size().get();

    let row = (0..n).find_map(|row| {
        line_owner((0..n).map(|column| board.at(column, row))).map(|p| Win::new(p, WinLine::Row(row)))
    });

    row.or_else(|| {
        (0..n).find_map(|column| {
            line_owner((0..n).map(|row| board.at(column, row)))
                .map(|p| Win::new(p, WinLine::Column(column)))
        })
    })
    .or_else(|| line_owner((0..n).map(|i| board.at(i, i))).map(|p| Win::new(p, WinLine::MainDiagonal)))
    .or_else(|| {
        line_owner((0..n).map(|i| board.at(n - 1 - i, i))).map(|p| Win::new(p, WinLine::AntiDiagonal))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BoardSize;

    /// Builds a board from rows of `X`, `O` and `.`.
    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(BoardSize::new(rows.len()).unwrap());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let index = r * rows.len() + c;
                match ch {
                    'X' => board.place(index, Player::X),
                    'O' => board.place(index, Player::O),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(find_winner(&board_from(&["...", "...", "..."])), None);
    }

    #[test]
    fn test_winner_row() {
        let board = board_from(&["....", "OOOO", "X.X.", "XX.."]);
        assert_eq!(find_winner(&board), Some(Win::new(Player::O, WinLine::Row(1))));
    }

    #[test]
    fn test_winner_column() {
        let board = board_from(&["X.O", "X.O", ".XO"]);
        assert_eq!(find_winner(&board), Some(Win::new(Player::O, WinLine::Column(2))));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_from(&["..X", ".X.", "XO."]);
        assert_eq!(find_winner(&board), Some(Win::new(Player::X, WinLine::AntiDiagonal)));
    }

    #[test]
    fn test_half_filled_line_never_wins() {
        let board = board_from(&["X..", "X..", "..."]);
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_rows_checked_before_columns_and_diagonals() {
        // Bottom row, first column and the main diagonal all complete.
        let board = board_from(&["XOO", "XXO", "XXX"]);
        assert_eq!(find_winner(&board), Some(Win::new(Player::X, WinLine::Row(2))));
    }

    #[test]
    fn test_columns_checked_before_diagonals() {
        let board = board_from(&["XOO", "XXO", "XOX"]);
        assert_eq!(find_winner(&board), Some(Win::new(Player::X, WinLine::Column(0))));
    }

    #[test]
    fn test_main_diagonal_checked_before_anti_diagonal() {
        let board = board_from(&["XOX", "OXO", "XOX"]);
        assert_eq!(find_winner(&board), Some(Win::new(Player::X, WinLine::MainDiagonal)));
    }

    #[test]
    fn test_draw_board_has_no_winner() {
        let board = board_from(&["XOX", "XOO", "OXX"]);
        assert_eq!(find_winner(&board), None);
        assert!(crate::rules::is_draw(&board));
    }
}
