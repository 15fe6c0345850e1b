//! Windowed front end: a full-screen, mouse-driven board.

mod app;
mod clickable;
mod input;
mod ui;

pub use app::{Dialog, WindowApp};
pub use clickable::{CellClickHandler, CellHitMap, ClickableCell};
pub use input::{clamp_cursor, move_cursor};
pub use ui::{CELL_HEIGHT, CELL_WIDTH, draw, to_color};

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use gridmark_engine::{BoardSize, PlayerColors};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Opens the game window and runs it until the user quits.
#[instrument(skip(colors))]
pub fn run(size: BoardSize, colors: PlayerColors) -> Result<()> {
    info!("Opening game window");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = WindowApp::new(size, colors);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Window loop error");
    }
    info!("Game window closed");
    res
}

/// Draws and dispatches events until the app asks to quit.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut WindowApp) -> Result<()> {
    loop {
        let mut hits = CellHitMap::default();
        terminal.draw(|f| hits = draw(f, app))?;

        if app.should_quit() {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if !hits.dispatch(mouse.column, mouse.row, app) {
                    debug!(column = mouse.column, row = mouse.row, "Click outside the board");
                }
            }
            _ => {}
        }
    }
}
