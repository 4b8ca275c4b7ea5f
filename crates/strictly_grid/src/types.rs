//! Core domain types for the 3x3 grid.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::Line;

/// Side length of the grid.
pub const GRID_SIZE: usize = 3;

/// Number of cells on the grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Cell holds a player's mark.
    Marked(Player),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Marked(player) => Some(player),
        }
    }

    /// Returns true if no mark has been placed here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Coordinate outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum CoordError {
    /// Row index is not in 0..=2.
    #[display("Row {} is outside the grid (expected 0-2)", row)]
    RowOutOfRange {
        /// The rejected row.
        row: usize,
    },
    /// Column index is not in 0..=2.
    #[display("Column {} is outside the grid (expected 0-2)", col)]
    ColumnOutOfRange {
        /// The rejected column.
        col: usize,
    },
    /// Row-major index is not in 0..=8.
    #[display("Index {} is outside the grid (expected 0-8)", index)]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
    },
}

/// A validated (row, column) position on the grid.
///
/// Both components are always in `0..3`, so a `Coord` can index the board
/// without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All 9 coordinates in row-major order.
    pub const ALL: [Coord; CELL_COUNT] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// The center cell.
    pub const CENTER: Coord = Coord::at(1, 1);

    /// Unchecked constructor for in-crate constants.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate, rejecting values outside the grid.
    #[instrument]
    pub fn new(row: usize, col: usize) -> Result<Self, CoordError> {
        if row >= GRID_SIZE {
            return Err(CoordError::RowOutOfRange { row });
        }
        if col >= GRID_SIZE {
            return Err(CoordError::ColumnOutOfRange { col });
        }
        Ok(Self { row, col })
    }

    /// Creates a coordinate from a row-major index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Result<Self, CoordError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(CoordError::IndexOutOfRange { index })
    }

    /// Row (0 = top).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0 = left).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// Returns the neighbouring coordinate, or `None` at the edge of the grid.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        Self::new(row, col).ok()
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        match (self.row, self.col) {
            (0, 0) => "Top-left",
            (0, 1) => "Top-center",
            (0, 2) => "Top-right",
            (1, 0) => "Middle-left",
            (1, 1) => "Center",
            (1, 2) => "Middle-right",
            (2, 0) => "Bottom-left",
            (2, 1) => "Bottom-center",
            _ => "Bottom-right",
        }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = CoordError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(row, col)
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

/// 3x3 board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    /// Sets the cell at the given coordinate.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.index()] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of marks on the board.
    pub fn marks_placed(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    /// Coordinates of the empty cells, row-major.
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|c| self.is_empty(*c))
            .collect()
    }

    /// The 8 lines a player can win on, in check order.
    pub fn lines(&self) -> &'static [Line; 8] {
        &Line::ALL
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based number so the text doubles as a key map.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let coord = Coord::at(row, col);
                let symbol = match self.get(coord) {
                    Cell::Empty => (coord.index() + 1).to_string(),
                    Cell::Marked(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < GRID_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < GRID_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LineKind;

    #[test]
    fn test_coord_rejects_out_of_range() {
        assert_eq!(Coord::new(3, 0), Err(CoordError::RowOutOfRange { row: 3 }));
        assert_eq!(
            Coord::new(0, 7),
            Err(CoordError::ColumnOutOfRange { col: 7 })
        );
        assert_eq!(
            Coord::from_index(9),
            Err(CoordError::IndexOutOfRange { index: 9 })
        );
    }

    #[test]
    fn test_coord_index_matches_all_order() {
        for (i, coord) in Coord::ALL.iter().enumerate() {
            assert_eq!(coord.index(), i);
            assert_eq!(Coord::from_index(i), Ok(*coord));
        }
    }

    #[test]
    fn test_offset_stops_at_edges() {
        let corner = Coord::ALL[0];
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), Some(Coord::CENTER));
        assert_eq!(Coord::ALL[8].offset(0, 1), None);
    }

    #[test]
    fn test_board_display_numbers_empty_cells() {
        let mut board = Board::new();
        board.set(Coord::CENTER, Cell::Marked(Player::X));
        board.set(Coord::ALL[8], Cell::Marked(Player::O));
        assert_eq!(board.display(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|O");
    }

    #[test]
    fn test_empty_cells_and_marks_placed() {
        let mut board = Board::new();
        assert_eq!(board.empty_cells().len(), 9);
        board.set(Coord::CENTER, Cell::Marked(Player::O));
        assert_eq!(board.marks_placed(), 1);
        assert!(!board.empty_cells().contains(&Coord::CENTER));
    }

    #[test]
    fn test_lines_in_check_order() {
        let kinds: Vec<LineKind> = Board::new().lines().iter().map(Line::kind).collect();
        assert_eq!(
            kinds,
            vec![
                LineKind::Row(0),
                LineKind::Row(1),
                LineKind::Row(2),
                LineKind::Column(0),
                LineKind::Column(1),
                LineKind::Column(2),
                LineKind::MainDiagonal,
                LineKind::AntiDiagonal,
            ]
        );
    }
}
