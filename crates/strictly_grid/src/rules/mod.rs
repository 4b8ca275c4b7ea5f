//! Win and draw detection.
//!
//! Pure functions over a [`Board`](crate::Board); [`GameState`](crate::GameState)
//! calls them after every accepted mark.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_lines};
