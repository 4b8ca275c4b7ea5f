//! Application state and logic.

use crate::input::{self, Action};
use crate::theme::Theme;
use strictly_grid::{Coord, GameState, Placement, Rejection};
use tracing::{debug, info, instrument};

/// Main application state: one game, one cursor.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Coord,
    theme: Theme,
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new(theme: Theme) -> Self {
        Self {
            game: GameState::new(),
            cursor: Coord::CENTER,
            theme,
            notice: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the selected cell.
    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    /// Gets the colors.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// One-line hint about the last ignored input, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a user action. Returns the placement outcome for placing
    /// actions.
    #[instrument(skip(self))]
    pub fn apply(&mut self, action: Action) -> Option<Placement> {
        match action {
            Action::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
                None
            }
            Action::PlaceAtCursor => Some(self.place(self.cursor)),
            Action::PlaceAt(coord) => {
                self.cursor = coord;
                Some(self.place(coord))
            }
            Action::Reset => {
                self.restart();
                None
            }
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
                None
            }
        }
    }

    fn place(&mut self, coord: Coord) -> Placement {
        let placement = self.game.place_mark(coord);
        self.notice = match placement {
            Placement::Placed { player, status, .. } => {
                debug!(%player, %coord, ?status, "Mark placed");
                None
            }
            Placement::Ignored(Rejection::GameOver) => {
                Some("Game over. Press 'r' to play again.".to_string())
            }
            Placement::Ignored(rejection @ Rejection::CellOccupied { .. }) => {
                Some(rejection.to_string())
            }
        };
        placement
    }

    /// Restarts the game. The cursor stays where it is.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.reset();
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Direction;
    use strictly_grid::{GameStatus, Player};

    fn c(row: usize, col: usize) -> Coord {
        Coord::new(row, col).unwrap()
    }

    #[test]
    fn test_place_at_cursor() {
        let mut app = App::new(Theme::default());
        app.apply(Action::MoveCursor(Direction::Up));
        app.apply(Action::MoveCursor(Direction::Left));
        assert_eq!(app.cursor(), c(0, 0));

        let placement = app.apply(Action::PlaceAtCursor).unwrap();
        assert!(placement.is_placed());
        assert_eq!(app.game().current_player(), Player::O);
    }

    #[test]
    fn test_place_at_moves_cursor() {
        let mut app = App::new(Theme::default());
        app.apply(Action::PlaceAt(c(2, 0)));
        assert_eq!(app.cursor(), c(2, 0));
        assert_eq!(app.game().history().len(), 1);
    }

    #[test]
    fn test_occupied_cell_sets_notice() {
        let mut app = App::new(Theme::default());
        app.apply(Action::PlaceAt(c(1, 1)));
        let placement = app.apply(Action::PlaceAt(c(1, 1))).unwrap();
        assert!(!placement.is_placed());
        assert_eq!(app.notice(), Some("Cell (1, 1) is already occupied"));

        app.apply(Action::PlaceAt(c(0, 0)));
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_input_ignored_after_win_until_reset() {
        let mut app = App::new(Theme::default());
        for coord in [c(0, 0), c(1, 1), c(0, 1), c(2, 2), c(0, 2)] {
            app.apply(Action::PlaceAt(coord));
        }
        assert_eq!(app.game().status().winner(), Some(Player::X));

        let placement = app.apply(Action::PlaceAt(c(2, 0))).unwrap();
        assert_eq!(placement, Placement::Ignored(Rejection::GameOver));
        assert!(app.notice().is_some());

        app.apply(Action::Reset);
        assert_eq!(app.game().status(), &GameStatus::InProgress);
        assert_eq!(app.game().current_player(), Player::X);
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Theme::default());
        assert!(!app.should_quit());
        app.apply(Action::Quit);
        assert!(app.should_quit());
    }
}
