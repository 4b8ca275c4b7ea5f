//! Colors used to draw the board.

use ratatui::style::Color;

/// Resolved colors for marks, the winning line and the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Foreground for X marks.
    pub x: Color,
    /// Foreground for O marks.
    pub o: Color,
    /// Background for the three cells of the winning line.
    pub highlight: Color,
    /// Background for the selected cell while the game is active.
    pub cursor: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            highlight: Color::LightGreen,
            cursor: Color::White,
        }
    }
}
