//! Application state and logic for the windowed front end.

use super::clickable::CellClickHandler;
use super::input::{clamp_cursor, move_cursor};
use crossterm::event::KeyCode;
use gridmark_engine::{BoardSize, Color, Coord, Game, PlayerColors};
use tracing::{debug, info, instrument};

/// A question blocking the board until answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialog {
    /// The game is over; start another?
    PlayAgain,
    /// Changing the size would abandon the game in progress.
    ConfirmRestart(BoardSize),
}

impl Dialog {
    /// Returns the dialog title.
    pub fn title(self) -> &'static str {
        match self {
            Dialog::PlayAgain => "Play Again?",
            Dialog::ConfirmRestart(_) => "Restart Game?",
        }
    }

    /// Returns the question asked.
    pub fn question(self) -> &'static str {
        match self {
            Dialog::PlayAgain => "Do you want to play another game?",
            Dialog::ConfirmRestart(_) => "This action will start a new game. Do you wish to proceed?",
        }
    }
}

/// Main application state.
#[derive(Debug, Clone)]
pub struct WindowApp {
    game: Game,
    colors: PlayerColors,
    size_input: BoardSize,
    has_game_started: bool,
    dialog: Option<Dialog>,
    cursor: Coord,
    message: Option<String>,
    should_quit: bool,
}

impl WindowApp {
    /// Creates a new application with an empty board.
    #[instrument]
    pub fn new(size: BoardSize, colors: PlayerColors) -> Self {
        Self {
            game: Game::with_colors(size, colors),
            colors,
            size_input: size,
            has_game_started: false,
            dialog: None,
            cursor: Coord::new(0, 0),
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gets the size shown in the size selector.
    pub fn size_input(&self) -> BoardSize {
        self.size_input
    }

    /// Gets the open dialog, if any.
    pub fn dialog(&self) -> Option<Dialog> {
        self.dialog
    }

    /// Gets the keyboard cursor.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the message about the last rejected move.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once a move has been accepted in the current game.
    pub fn has_game_started(&self) -> bool {
        self.has_game_started
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the player prompt and the color to draw it in.
    ///
    /// A tie is drawn in the terminal's default color (`None`).
    pub fn prompt(&self) -> (String, Option<Color>) {
        let color = self.game.current_player_color();
        if let Some(winner) = self.game.winner() {
            (format!("Player {} won!", winner), Some(color))
        } else if self.game.is_board_full() {
            ("Oh no! It was a tie!".to_string(), None)
        } else {
            (
                format!("Waiting for Player {}", self.game.current_player()),
                Some(color),
            )
        }
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let Some(dialog) = self.dialog {
            match key {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => self.answer(true),
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => self.answer(false),
                KeyCode::Char('q') => self.should_quit = true,
                _ => debug!(?dialog, "Key ignored while dialog is open"),
            }
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char(' ') => self.cell_clicked(self.cursor),
            KeyCode::Char('+') | KeyCode::Char('=') => self.size_input = self.size_input.larger(),
            KeyCode::Char('-') => self.size_input = self.size_input.smaller(),
            KeyCode::Char('s') => self.apply_size(),
            code => self.cursor = move_cursor(self.cursor, code, self.game.size()),
        }
    }

    /// Applies the size selector, asking first if a game is in progress.
    #[instrument(skip(self), fields(requested = %self.size_input))]
    pub fn apply_size(&mut self) {
        if self.size_input == self.game.size() {
            return;
        }
        if self.has_game_started {
            self.dialog = Some(Dialog::ConfirmRestart(self.size_input));
        } else {
            self.restart(self.size_input);
        }
    }

    /// Answers the open dialog.
    #[instrument(skip(self))]
    pub fn answer(&mut self, yes: bool) {
        match self.dialog.take() {
            Some(Dialog::PlayAgain) if yes => self.restart(self.game.size()),
            Some(Dialog::ConfirmRestart(size)) if yes => self.restart(size),
            Some(dialog) => debug!(?dialog, "Dialog declined"),
            None => {}
        }
    }

    /// Starts a new game of the given size.
    #[instrument(skip(self))]
    pub fn restart(&mut self, size: BoardSize) {
        info!(%size, "Starting new window game");
        self.game = Game::with_colors(size, self.colors);
        self.size_input = size;
        self.has_game_started = false;
        self.message = None;
        self.cursor = clamp_cursor(self.cursor, size);
    }
}

impl CellClickHandler for WindowApp {
    #[instrument(skip(self))]
    fn cell_clicked(&mut self, coord: Coord) {
        if self.dialog.is_some() {
            return;
        }
        self.cursor = coord;

        let result = self.game.apply_move(coord);
        if result.is_accepted() {
            self.has_game_started = true;
            self.message = None;
        } else {
            self.message = Some(result.to_string());
        }

        // A finished game asks again on every click.
        if self.game.is_over() {
            self.message = None;
            self.dialog = Some(Dialog::PlayAgain);
        }
    }
}
