//! Terminal presentation layer for [`strictly_grid`].
//!
//! Owns exactly one [`GameState`](strictly_grid::GameState) inside an
//! [`App`], turns key presses and mouse clicks into [`Action`]s, and draws
//! the board, status line and winning-line highlight with ratatui.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
pub mod logging;
mod terminal;
mod theme;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH, ThemeConfig};
pub use input::{Action, BoardLayout, Direction, action_for_key, action_for_mouse, move_cursor};
pub use terminal::run;
pub use theme::Theme;
