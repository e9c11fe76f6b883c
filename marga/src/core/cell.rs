//! Grid cell coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Row/column offsets of the 8 neighbors: cardinals first, then diagonals.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, 1),   // E
    (1, 0),   // S
    (0, -1),  // W
    (-1, 0),  // N
    (1, 1),   // SE
    (-1, -1), // NW
    (1, -1),  // SW
    (-1, 1),  // NE
];

/// Grid coordinates (row, column), both zero-based.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
pub struct Cell {
    /// Row index
    pub row: usize,
    /// Column index
    pub col: usize,
}

impl Cell {
    /// Create a new cell coordinate
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Chebyshev distance (max of row and column distance) - used for 8-connected grids
    #[inline]
    pub fn chebyshev_distance(&self, other: &Cell) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }

    /// Straight-line distance in cell units
    #[inline]
    pub fn euclidean_distance(&self, other: &Cell) -> f32 {
        let dr = self.row.abs_diff(other.row) as f32;
        let dc = self.col.abs_diff(other.col) as f32;
        (dr * dr + dc * dc).sqrt()
    }

    /// True if `other` is one of the 8 neighbors of this cell.
    #[inline]
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.chebyshev_distance(other) == 1
    }

    /// True if moving to `other` changes both row and column.
    #[inline]
    pub fn is_diagonal_to(&self, other: &Cell) -> bool {
        self.row != other.row && self.col != other.col
    }

    /// Cell displaced by the given offset, or `None` when it would leave
    /// the non-negative quadrant. Upper bounds are the grid's concern.
    #[inline]
    pub fn offset(&self, d_row: isize, d_col: isize) -> Option<Cell> {
        Some(Cell::new(
            self.row.checked_add_signed(d_row)?,
            self.col.checked_add_signed(d_col)?,
        ))
    }

    /// The up-to-8 neighbors that do not underflow, in [`NEIGHBOR_OFFSETS`] order.
    pub fn neighbors_8(self) -> impl Iterator<Item = Cell> {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(dr, dc)| self.offset(dr, dc))
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
