//! Pure tic-tac-toe logic on a 3x3 grid.
//!
//! The whole game is one owned state object, [`GameState`]: place a mark,
//! check for a win or a draw, switch turns, reset. There is no rendering
//! here; a presentation layer holds a `GameState`, forwards cell
//! activations to [`GameState::place_mark`] and draws from the queries.
//!
//! # Example
//!
//! ```
//! use strictly_grid::{Coord, GameState, GameStatus, Player};
//!
//! # fn main() -> Result<(), strictly_grid::CoordError> {
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     game.place_mark(Coord::new(row, col)?);
//! }
//! assert_eq!(game.status().winner(), Some(Player::X));
//! assert!(matches!(game.status(), GameStatus::Won { .. }));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod line;
pub mod rules;
mod state;
mod types;

pub use line::{Line, LineKind, WinningLine};
pub use state::{GameState, GameStatus, Move, Placement, Rejection, ReplayError};
pub use types::{Board, CELL_COUNT, Cell, Coord, CoordError, GRID_SIZE, Player};
