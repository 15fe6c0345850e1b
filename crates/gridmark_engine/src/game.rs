//! The board engine: turn order, move validation and win tracking.

use crate::error::SizeError;
use crate::geometry::{WinEdge, WinLine};
use crate::invariants::{InvariantSet, MoveCountInvariant, TurnInvariant};
use crate::rules::win::{Win, find_winner};
use crate::types::{BoardSize, Color, Coord, MoveResult, Player, PlayerColors};
use crate::Board;
use tracing::{debug, info, instrument};

/// N×N tic-tac-toe game engine.
///
/// State changes only through [`Game::apply_move`]. Accessors hand out
/// shared borrows or owned copies, never mutable references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    colors: PlayerColors,
    current_player: Player,
    move_count: usize,
    last_move: Option<Coord>,
    win: Option<Win>,
}

impl Game {
    /// Creates a new game with the default player colors.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self::with_colors(size, PlayerColors::default())
    }

    /// Creates a new game with the given player colors.
    #[instrument]
    pub fn with_colors(size: BoardSize, colors: PlayerColors) -> Self {
        Self {
            board: Board::new(size),
            colors,
            current_player: Player::X,
            move_count: 0,
            last_move: None,
            win: None,
        }
    }

    /// Creates a new game from an unvalidated size.
    ///
    /// # Errors
    ///
    /// Returns [`SizeError`] if `size` is outside the supported range.
    #[track_caller]
    #[instrument]
    pub fn with_size(size: usize) -> Result<Self, SizeError> {
        Ok(Self::new(BoardSize::new(size)?))
    }

    /// Restarts in place with the same size and colors.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::with_colors(self.board.size(), self.colors);
    }

    /// Attempts to play the current player's marker at `coord`.
    ///
    /// Rejected moves leave the game untouched. On a winning move the
    /// current player is kept, so the winner stays current for rendering.
    #[instrument(skip(self), fields(player = %self.current_player, moves = self.move_count))]
    pub fn apply_move(&mut self, coord: Coord) -> MoveResult {
        if self.win.is_some() {
            debug!("Rejected move: game already won");
            return MoveResult::AlreadyWon;
        }

        let Some(index) = self.board.index_of(coord) else {
            debug!("Rejected move: out of range");
            return MoveResult::OutOfRange;
        };

        if !self.board.is_empty(coord) {
            debug!("Rejected move: square taken");
            return MoveResult::CellTaken;
        }

        self.board.place(index, self.current_player);
        self.move_count += 1;
        self.last_move = Some(coord);

        self.win = find_winner(&self.board);
        match self.win {
            Some(win) => info!(winner = %win.player, line = %win.line, "Game won"),
            None => {
                if self.is_board_full() {
                    info!("Board full with no winner");
                }
                self.current_player = self.current_player.opponent();
            }
        }

        debug_assert_eq!(<(MoveCountInvariant, TurnInvariant)>::check_all(self), Ok(()));

        MoveResult::Accepted
    }

    /// True iff every square has been played.
    pub fn is_board_full(&self) -> bool {
        self.move_count == self.board.size().squares()
    }

    /// True iff a player has completed a line.
    pub fn is_winner(&self) -> bool {
        self.win.is_some()
    }

    /// True once the game is won or tied.
    pub fn is_over(&self) -> bool {
        self.is_winner() || self.is_board_full()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        self.win.map(|w| w.player)
    }

    /// Returns the completed line, if any.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.win.map(|w| w.line)
    }

    /// Returns the endpoints of the winning line, if any.
    pub fn winning_edge(&self) -> Option<WinEdge> {
        self.win.map(|w| w.line.edge(self.board.size()))
    }

    /// Returns the player whose move is awaited (or the winner, once won).
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the display color of the current player.
    pub fn current_player_color(&self) -> Color {
        self.colors.of(self.current_player)
    }

    /// Returns the display color of `player`.
    pub fn player_color(&self, player: Player) -> Color {
        self.colors.of(player)
    }

    /// Returns the player colors.
    pub fn colors(&self) -> PlayerColors {
        self.colors
    }

    /// Returns an owned copy of the board.
    #[instrument(skip(self))]
    pub fn board_snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Returns a read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.board.size()
    }

    /// Returns the number of accepted moves.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Returns the most recently accepted move.
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }
}
