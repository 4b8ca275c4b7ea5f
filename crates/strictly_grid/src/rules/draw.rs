//! Draw detection logic.

use super::win::check_winner;
use crate::{Board, Player};
use strum::IntoEnumIterator;
use tracing::instrument;

/// Checks if every cell holds a mark.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|c| !c.is_empty())
}

/// A full board on which neither player holds a line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && Player::iter().all(|p| check_winner(board, p).is_none())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord};

    fn board_from(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                let cell = match ch {
                    'X' => Cell::Marked(Player::X),
                    'O' => Cell::Marked(Player::O),
                    _ => Cell::Empty,
                };
                board.set(Coord::at(r, c), cell);
            }
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from(["X..", ".O.", "..."]);
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_draw_detection() {
        let board = board_from(["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let board = board_from(["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
