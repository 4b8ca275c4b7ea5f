//! Win detection logic.

use crate::{Board, Cell, Line, Player};
use tracing::instrument;

/// Returns the first line held entirely by `player`.
///
/// Lines are checked in [`Board::lines`] order: rows 0-2, columns 0-2,
/// main diagonal, anti-diagonal.
#[instrument(skip(board))]
pub fn check_winner(board: &Board, player: Player) -> Option<Line> {
    board
        .lines()
        .iter()
        .find(|line| holds(board, line, player))
        .copied()
}

/// Returns every line held entirely by `player`.
///
/// On boards reached through alternating single moves this never has more
/// than one entry unless the final mark closed two lines at once.
#[instrument(skip(board))]
pub fn winning_lines(board: &Board, player: Player) -> Vec<Line> {
    board
        .lines()
        .iter()
        .filter(|line| holds(board, line, player))
        .copied()
        .collect()
}

fn holds(board: &Board, line: &Line, player: Player) -> bool {
    line.coords()
        .iter()
        .all(|coord| board.get(*coord) == Cell::Marked(player))
}
