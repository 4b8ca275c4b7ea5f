//! Rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_grid::{CELL_COUNT, Cell, Coord, GameStatus, Player};

use crate::app::App;
use crate::input::BoardLayout;

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3;

const TITLE_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const HELP: &str = "←↑↓→/hjkl move · Enter/Space/1-9/click: place · r: new game · q: quit";

/// Draws the whole screen and returns where the cells ended up, for mouse
/// hit-testing.
pub fn draw(frame: &mut Frame, app: &App) -> BoardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Title
            Constraint::Min(BOARD_HEIGHT), // Board
            Constraint::Length(4),         // Status
            Constraint::Length(1),         // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Grid - Tic Tac Toe")
        .style(TITLE_STYLE)
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let layout = board_layout(chunks[1]);
    draw_board(frame, app, &layout);
    draw_status(frame, chunks[2], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    layout
}

/// Computes cell rectangles for a board centered in `area`.
pub fn board_layout(area: Rect) -> BoardLayout {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(board_area);

    let mut cells = [Rect::default(); CELL_COUNT];
    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            cells[row * 3 + col] = *cell_area;
        }
    }
    BoardLayout::new(cells)
}

fn draw_board(frame: &mut Frame, app: &App, layout: &BoardLayout) {
    for coord in Coord::ALL {
        draw_cell(frame, layout.cell(coord), app, coord);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, coord: Coord) {
    let game = app.game();
    let theme = app.theme();

    let (symbol, mut style) = match game.board().get(coord) {
        Cell::Empty => (
            (coord.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Marked(Player::X) => (
            "X".to_string(),
            Style::default().fg(theme.x).add_modifier(Modifier::BOLD),
        ),
        Cell::Marked(Player::O) => (
            "O".to_string(),
            Style::default().fg(theme.o).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = game
        .status()
        .winning_line()
        .is_some_and(|line| line.contains(coord));

    if on_winning_line {
        style = style.bg(theme.highlight);
    } else if !game.is_active() {
        style = style.add_modifier(Modifier::DIM);
    } else if coord == app.cursor() {
        style = style.bg(theme.cursor);
        if game.board().is_empty(coord) {
            style = style.fg(Color::Black);
        }
    }

    let border = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let paragraph = Paragraph::new(Line::from(Span::raw(symbol)))
        .style(style)
        .alignment(Alignment::Center)
        .block(border);
    frame.render_widget(paragraph, area);
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let game = app.game();
    let color = match game.status() {
        GameStatus::InProgress => match game.current_player() {
            Player::X => app.theme().x,
            Player::O => app.theme().o,
        },
        GameStatus::Won { .. } => Color::Green,
        GameStatus::Draw => Color::Yellow,
    };

    let mut lines = vec![Line::from(Span::styled(
        game.status_message(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    if let Some(notice) = app.notice() {
        lines.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Yellow),
        )));
    } else if !game.is_active() {
        lines.push(Line::from("Press 'r' to play again."));
    }

    let status = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
