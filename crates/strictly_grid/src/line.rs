//! Rows, columns and diagonals of the grid.

use super::types::Coord;
use serde::{Deserialize, Serialize};

/// Which of the 8 lines a [`Line`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Horizontal line at the given row.
    #[display("row {}", _0)]
    Row(usize),
    /// Vertical line at the given column.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// Three coordinates forming a row, column or diagonal.
///
/// When all three cells hold the same mark this is the winning line
/// reported in [`GameStatus::Won`](crate::GameStatus::Won).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line {
    kind: LineKind,
    coords: [Coord; 3],
}

/// Alias used where the line is known to be complete.
pub type WinningLine = Line;

impl Line {
    /// All 8 lines in check order: rows 0-2, columns 0-2, main diagonal,
    /// anti-diagonal.
    pub const ALL: [Line; 8] = [
        Line::from_cells(LineKind::Row(0), [(0, 0), (0, 1), (0, 2)]),
        Line::from_cells(LineKind::Row(1), [(1, 0), (1, 1), (1, 2)]),
        Line::from_cells(LineKind::Row(2), [(2, 0), (2, 1), (2, 2)]),
        Line::from_cells(LineKind::Column(0), [(0, 0), (1, 0), (2, 0)]),
        Line::from_cells(LineKind::Column(1), [(0, 1), (1, 1), (2, 1)]),
        Line::from_cells(LineKind::Column(2), [(0, 2), (1, 2), (2, 2)]),
        Line::from_cells(LineKind::MainDiagonal, [(0, 0), (1, 1), (2, 2)]),
        Line::from_cells(LineKind::AntiDiagonal, [(0, 2), (1, 1), (2, 0)]),
    ];

    /// Cells are `(row, col)` pairs already known to be in range.
    const fn from_cells(kind: LineKind, cells: [(usize, usize); 3]) -> Self {
        let [a, b, c] = cells;
        Self {
            kind,
            coords: [
                Coord::at(a.0, a.1),
                Coord::at(b.0, b.1),
                Coord::at(c.0, c.1),
            ],
        }
    }

    /// Which line this is.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The three coordinates, ordered top-to-bottom then left-to-right
    /// (right-to-left for the anti-diagonal).
    pub fn coords(&self) -> [Coord; 3] {
        self.coords
    }

    /// Returns true if `coord` lies on this line.
    pub fn contains(&self, coord: Coord) -> bool {
        self.coords.contains(&coord)
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c] = self.coords;
        write!(f, "{} [{}, {}, {}]", self.kind, a, b, c)
    }
}
