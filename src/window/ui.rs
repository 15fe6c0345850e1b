//! Stateless rendering for the windowed front end.

use super::app::WindowApp;
use super::clickable::{CellHitMap, ClickableCell};
use gridmark_engine::{Color as PlayerColor, Coord, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;

/// Maps an engine color onto the terminal palette.
pub fn to_color(color: PlayerColor) -> Color {
    match color {
        PlayerColor::Black => Color::Black,
        PlayerColor::White => Color::White,
        PlayerColor::Red => Color::Red,
        PlayerColor::Green => Color::Green,
        PlayerColor::Blue => Color::Blue,
        PlayerColor::Yellow => Color::Yellow,
    }
}

/// Renders the whole window and returns the clickable cells drawn.
pub fn draw(frame: &mut Frame, app: &WindowApp) -> CellHitMap {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Size selector
            Constraint::Length(3), // Player prompt
            Constraint::Min(CELL_HEIGHT), // Board
            Constraint::Length(1), // Help
        ])
        .split(area);

    draw_size_bar(frame, chunks[0], app);
    draw_prompt(frame, chunks[1], app);
    let hits = draw_board(frame, chunks[2], app);
    draw_help(frame, chunks[3]);

    if let Some(dialog) = app.dialog() {
        let popup = center_rect(area, 64, 5);
        let text = vec![
            Line::from(dialog.question()),
            Line::from(""),
            Line::from(Span::styled("[y] Yes    [n] No", Style::default().add_modifier(Modifier::BOLD))),
        ];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().title(dialog.title()).borders(Borders::ALL));
        frame.render_widget(Clear, popup);
        frame.render_widget(paragraph, popup);
    }

    hits
}

fn draw_size_bar(frame: &mut Frame, area: Rect, app: &WindowApp) {
    let line = Line::from(vec![
        Span::raw("Game Board Size: "),
        Span::styled(
            format!("< {} >", app.size_input()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("   [s] Set Board Size", Style::default().fg(Color::DarkGray)),
    ]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .title("Tic-Tac-Toe")
            .borders(Borders::ALL),
    );
    frame.render_widget(paragraph, area);
}

fn draw_prompt(frame: &mut Frame, area: Rect, app: &WindowApp) {
    let (text, color) = app.prompt();
    let mut style = Style::default().add_modifier(Modifier::BOLD);
    if let Some(color) = color {
        style = style.fg(to_color(color));
    }

    let mut spans = vec![Span::styled(text, style)];
    if let Some(message) = app.message() {
        spans.push(Span::styled(format!("   ({})", message), Style::default().fg(Color::DarkGray)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &WindowApp) -> CellHitMap {
    let game = app.game();
    let n = game.size().get() as u16;
    let board_area = center_rect(area, n * CELL_WIDTH, n * CELL_HEIGHT);
    let winning_edge = game.winning_edge();
    let mut hits = CellHitMap::default();

    for (row, squares) in game.board().rows().enumerate() {
        for (column, square) in squares.iter().enumerate() {
            let cell_area = Rect::new(
                board_area.x + column as u16 * CELL_WIDTH,
                board_area.y + row as u16 * CELL_HEIGHT,
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area);
            if cell_area.is_empty() {
                continue;
            }

            let coord = Coord::new(column as i32, row as i32);
            let on_win_line = winning_edge.is_some_and(|edge| edge.contains(coord));
            draw_cell(frame, cell_area, app, coord, *square, on_win_line);
            hits.push(ClickableCell::new(cell_area, coord));
        }
    }

    hits
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &WindowApp, coord: Coord, square: Square, on_win_line: bool) {
    let game = app.game();

    let mut mark_style = match square.player() {
        Some(player) => Style::default()
            .fg(to_color(game.player_color(player)))
            .add_modifier(Modifier::BOLD),
        None => Style::default().fg(Color::DarkGray),
    };
    let mut border_style = Style::default().fg(Color::DarkGray);

    if on_win_line {
        // The win line is drawn in the winner's color, who stays current.
        let color = to_color(game.current_player_color());
        mark_style = mark_style.bg(color).fg(Color::Black);
        border_style = border_style.fg(color);
    }
    if coord == app.cursor() && !game.is_over() {
        border_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", square.mark()), mark_style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border_style));
    frame.render_widget(paragraph, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new("arrows move | enter/click play | +/- size | s set size | q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
