//! Keyboard and mouse mapping.
//!
//! Raw terminal events become [`Action`]s here; the [`App`](crate::App)
//! never sees a key code. Cell activation always carries the target
//! [`Coord`] explicitly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use strictly_grid::{CELL_COUNT, Coord};

/// Cursor movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 2.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 2.
    Right,
}

impl Direction {
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Something the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the selection cursor.
    MoveCursor(Direction),
    /// Place a mark on the cursor cell.
    PlaceAtCursor,
    /// Place a mark on a specific cell (digit key or mouse click).
    PlaceAt(Coord),
    /// Start a new game.
    Reset,
    /// Leave the application.
    Quit,
}

/// Moves the cursor one cell, staying put at the edge of the grid.
pub fn move_cursor(cursor: Coord, direction: Direction) -> Coord {
    let (d_row, d_col) = direction.delta();
    cursor.offset(d_row, d_col).unwrap_or(cursor)
}

/// Maps a key press to an action.
///
/// Digits `1`-`9` address cells in row-major order, matching the numbers
/// drawn on empty cells. With Ctrl held only Ctrl+C does anything (quit),
/// since raw mode swallows the terminal's own interrupt.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlaceAtCursor),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Reset),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(c) => {
            let digit = c.to_digit(10)? as usize;
            let coord = Coord::from_index(digit.checked_sub(1)?).ok()?;
            Some(Action::PlaceAt(coord))
        }
        _ => None,
    }
}

/// Screen rectangles of the 9 cells from the last drawn frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardLayout {
    cells: [Rect; CELL_COUNT],
}

impl BoardLayout {
    /// Creates a layout from cell rectangles in row-major order.
    pub fn new(cells: [Rect; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Rectangle of a cell.
    pub fn cell(&self, coord: Coord) -> Rect {
        self.cells[coord.index()]
    }

    /// Returns the cell under a terminal position.
    pub fn hit(&self, column: u16, row: u16) -> Option<Coord> {
        let position = Position::new(column, row);
        Coord::ALL
            .into_iter()
            .find(|coord| self.cell(*coord).contains(position))
    }
}

/// Maps a mouse event to an action. Only left clicks on a cell count.
pub fn action_for_mouse(event: MouseEvent, layout: &BoardLayout) -> Option<Action> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            layout.hit(event.column, event.row).map(Action::PlaceAt)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    fn press(code: KeyCode) -> Option<Action> {
        action_for_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press_ctrl(code: KeyCode) -> Option<Action> {
        action_for_key(KeyEvent::new(code, KeyModifiers::CONTROL))
    }

    #[test]
    fn test_cursor_moves_within_grid() {
        assert_eq!(move_cursor(Coord::CENTER, Direction::Up), c(0, 1));
        assert_eq!(move_cursor(Coord::CENTER, Direction::Down), c(2, 1));
        assert_eq!(move_cursor(Coord::CENTER, Direction::Left), c(1, 0));
        assert_eq!(move_cursor(Coord::CENTER, Direction::Right), c(1, 2));
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        assert_eq!(move_cursor(c(0, 0), Direction::Up), c(0, 0));
        assert_eq!(move_cursor(c(0, 0), Direction::Left), c(0, 0));
        assert_eq!(move_cursor(c(2, 2), Direction::Down), c(2, 2));
        assert_eq!(move_cursor(c(2, 2), Direction::Right), c(2, 2));
    }

    #[test]
    fn test_every_direction_has_keys() {
        let keys = [
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Char('k'),
            KeyCode::Char('j'),
            KeyCode::Char('h'),
            KeyCode::Char('l'),
        ];
        for direction in Direction::iter() {
            let wanted = Some(Action::MoveCursor(direction));
            let bound = keys.iter().filter(|k| press(**k) == wanted).count();
            assert_eq!(bound, 2, "{:?}", direction);
        }
    }

    #[test]
    fn test_digit_keys_address_cells() {
        let place = |row, col| Some(Action::PlaceAt(c(row, col)));
        assert_eq!(press(KeyCode::Char('1')), place(0, 0));
        assert_eq!(press(KeyCode::Char('5')), place(1, 1));
        assert_eq!(press(KeyCode::Char('9')), place(2, 2));
        assert_eq!(press(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(press(KeyCode::Enter), Some(Action::PlaceAtCursor));
        assert_eq!(press(KeyCode::Char(' ')), Some(Action::PlaceAtCursor));
        assert_eq!(press(KeyCode::Char('r')), Some(Action::Reset));
        assert_eq!(press(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(press(KeyCode::Char('z')), None);
        assert_eq!(press(KeyCode::Tab), None);
    }

    #[test]
    fn test_ctrl_c_quits() {
        assert_eq!(press_ctrl(KeyCode::Char('c')), Some(Action::Quit));
    }

    #[test]
    fn test_other_ctrl_chords_do_nothing() {
        assert_eq!(press_ctrl(KeyCode::Char('r')), None);
        assert_eq!(press_ctrl(KeyCode::Char('q')), None);
        assert_eq!(press_ctrl(KeyCode::Char('5')), None);
        assert_eq!(press(KeyCode::Char('c')), None);
    }

    fn layout() -> BoardLayout {
        let mut cells = [Rect::default(); CELL_COUNT];
        for coord in Coord::ALL {
            let x = coord.col() as u16 * 9;
            let y = coord.row() as u16 * 3;
            cells[coord.index()] = Rect::new(x, y, 9, 3);
        }
        BoardLayout::new(cells)
    }

    fn click(button: MouseButton, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(button),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_hit_testing() {
        let layout = layout();
        assert_eq!(layout.hit(0, 0), Some(c(0, 0)));
        assert_eq!(layout.hit(13, 4), Some(c(1, 1)));
        assert_eq!(layout.hit(26, 8), Some(c(2, 2)));
        assert_eq!(layout.hit(27, 0), None);
        assert_eq!(BoardLayout::default().hit(0, 0), None);
    }

    #[test]
    fn test_only_left_click_places() {
        let layout = layout();

        let left = click(MouseButton::Left, 10, 7);
        let placed = action_for_mouse(left, &layout);
        assert_eq!(placed, Some(Action::PlaceAt(c(2, 1))));

        let right = click(MouseButton::Right, 10, 7);
        assert_eq!(action_for_mouse(right, &layout), None);

        let mut moved = left;
        moved.kind = MouseEventKind::Moved;
        assert_eq!(action_for_mouse(moved, &layout), None);
    }
}
