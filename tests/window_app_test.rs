//! Tests for the windowed front end state and rendering.

use crossterm::event::KeyCode;
use gridmark::window::{CellClickHandler, CellHitMap, Dialog, WindowApp, draw};
use gridmark_engine::{BoardSize, Color, Coord, Player, PlayerColors};
use ratatui::{Terminal, backend::TestBackend};

fn app(n: usize) -> WindowApp {
    WindowApp::new(BoardSize::new(n).expect("valid size"), PlayerColors::default())
}

fn click(app: &mut WindowApp, moves: &[(i32, i32)]) {
    for &(column, row) in moves {
        app.cell_clicked(Coord::new(column, row));
    }
}

fn render(app: &WindowApp) -> (String, CellHitMap) {
    let mut terminal = Terminal::new(TestBackend::new(80, 40)).unwrap();
    let mut hits = CellHitMap::default();
    terminal.draw(|f| hits = draw(f, app)).unwrap();
    let text = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect::<String>();
    (text, hits)
}

#[test]
fn test_prompt_follows_game() {
    let mut app = app(3);
    assert_eq!(app.prompt(), ("Waiting for Player X".to_string(), Some(Color::Green)));

    click(&mut app, &[(0, 0)]);
    assert_eq!(app.prompt(), ("Waiting for Player O".to_string(), Some(Color::Yellow)));

    click(&mut app, &[(1, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(app.game().winner(), Some(Player::X));
    assert_eq!(app.prompt(), ("Player X won!".to_string(), Some(Color::Green)));
    assert_eq!(app.dialog(), Some(Dialog::PlayAgain));
}

#[test]
fn test_tie_prompt_has_no_color() {
    let mut app = app(3);
    click(
        &mut app,
        &[(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2)],
    );
    assert_eq!(app.prompt(), ("Oh no! It was a tie!".to_string(), None));
    assert_eq!(app.dialog(), Some(Dialog::PlayAgain));
}

#[test]
fn test_rejected_click_sets_message() {
    let mut app = app(3);
    click(&mut app, &[(1, 1), (1, 1)]);
    assert_eq!(app.game().move_count(), 1);
    assert_eq!(app.message(), Some("The given move has already been played"));
    assert_eq!(app.dialog(), None);

    click(&mut app, &[(0, 0)]);
    assert_eq!(app.message(), None);
}

#[test]
fn test_play_again_answers() {
    let mut app = app(2);
    click(&mut app, &[(0, 0), (0, 1), (1, 1)]);
    assert!(app.game().is_over());

    // Clicks are ignored while the dialog is open
    click(&mut app, &[(1, 0)]);
    assert_eq!(app.game().move_count(), 3);

    app.handle_key(KeyCode::Char('n'));
    assert_eq!(app.dialog(), None);
    assert!(app.game().is_over());

    let mut app = self::app(2);
    click(&mut app, &[(0, 0), (0, 1), (1, 1)]);
    app.handle_key(KeyCode::Char('y'));
    assert_eq!(app.game().move_count(), 0);
    assert_eq!(app.game().size().get(), 2);
    assert!(!app.has_game_started());
}

#[test]
fn test_declined_replay_asks_again_on_next_click() {
    let mut app = app(2);
    click(&mut app, &[(0, 0), (0, 1), (1, 1)]);
    app.handle_key(KeyCode::Char('n'));
    assert_eq!(app.dialog(), None);

    click(&mut app, &[(1, 0)]);
    assert_eq!(app.dialog(), Some(Dialog::PlayAgain));
    assert_eq!(app.message(), None);
    assert_eq!(app.game().move_count(), 3);

    app.handle_key(KeyCode::Char('y'));
    assert_eq!(app.game().move_count(), 0);
}

#[test]
fn test_declined_replay_after_tie_asks_again() {
    let mut app = app(3);
    click(
        &mut app,
        &[(0, 0), (1, 0), (2, 0), (1, 1), (0, 1), (2, 1), (1, 2), (0, 2), (2, 2)],
    );
    app.handle_key(KeyCode::Esc);
    assert_eq!(app.dialog(), None);

    click(&mut app, &[(1, 1)]);
    assert_eq!(app.dialog(), Some(Dialog::PlayAgain));
}

#[test]
fn test_size_change_before_first_move_applies_immediately() {
    let mut app = app(3);
    app.handle_key(KeyCode::Char('+'));
    app.handle_key(KeyCode::Char('+'));
    assert_eq!(app.game().size().get(), 3);
    app.handle_key(KeyCode::Char('s'));
    assert_eq!(app.game().size().get(), 5);
    assert_eq!(app.dialog(), None);
}

#[test]
fn test_size_change_mid_game_asks_first() {
    let mut app = app(3);
    click(&mut app, &[(0, 0)]);
    app.handle_key(KeyCode::Char('-'));
    app.handle_key(KeyCode::Char('s'));
    assert_eq!(app.dialog(), Some(Dialog::ConfirmRestart(BoardSize::new(2).unwrap())));

    app.handle_key(KeyCode::Esc);
    assert_eq!(app.game().size().get(), 3);
    assert_eq!(app.game().move_count(), 1);
    assert!(!app.should_quit());

    app.handle_key(KeyCode::Char('s'));
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.game().size().get(), 2);
    assert_eq!(app.game().move_count(), 0);
}

#[test]
fn test_size_selector_is_clamped() {
    let mut app = app(10);
    app.handle_key(KeyCode::Char('+'));
    assert_eq!(app.size_input().get(), 10);

    let mut app = self::app(2);
    app.handle_key(KeyCode::Char('-'));
    assert_eq!(app.size_input().get(), 2);
}

#[test]
fn test_keyboard_play() {
    let mut app = app(3);
    app.handle_key(KeyCode::Right);
    app.handle_key(KeyCode::Down);
    app.handle_key(KeyCode::Enter);
    assert_eq!(app.game().last_move(), Some(Coord::new(1, 1)));

    app.handle_key(KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_render_shows_prompt_and_registers_every_cell() {
    let app = app(3);
    let (text, hits) = render(&app);
    assert!(text.contains("Waiting for Player X"));
    assert!(text.contains("Game Board Size:"));
    assert_eq!(hits.cells().len(), 9);

    let (_, hits) = render(&self::app(10));
    assert_eq!(hits.cells().len(), 100);
}

#[test]
fn test_rendered_cells_dispatch_their_coordinate() {
    let mut app = app(4);
    let (_, hits) = render(&app);
    let target = hits
        .cells()
        .iter()
        .find(|cell| cell.coord == Coord::new(2, 3))
        .copied()
        .unwrap();

    let column = target.area.x + target.area.width / 2;
    let row = target.area.y + target.area.height / 2;
    assert!(hits.dispatch(column, row, &mut app));
    assert_eq!(app.game().last_move(), Some(Coord::new(2, 3)));

    let (text, _) = render(&app);
    assert!(text.contains(" X "));
    assert!(text.contains("Waiting for Player O"));
}

#[test]
fn test_render_shows_dialog() {
    let mut app = app(2);
    click(&mut app, &[(0, 0), (0, 1), (1, 1)]);
    let (text, _) = render(&app);
    assert!(text.contains("Play Again?"));
    assert!(text.contains("Do you want to play another game?"));
}
