//! Rectangular terrain grid.
//!
//! The grid is the read-only terrain layer shared by the planner and the
//! rover. Rover occupancy is never written into it; see
//! [`TerrainGrid::render_with_rover`] for an overlay view.

use std::fmt;

use thiserror::Error;

use super::{Cell, TerrainType};

/// Errors raised while building a grid from external data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// The input has no rows or no columns.
    #[error("grid is empty")]
    Empty,

    /// A row has a different width from the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Offending row index
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of the offending row
        found: usize,
    },

    /// Unrecognised ASCII map symbol.
    #[error("unknown terrain symbol '{symbol}' at {cell}")]
    UnknownSymbol {
        /// The symbol read
        symbol: char,
        /// Where it was read
        cell: Cell,
    },

    /// Unrecognised numeric terrain code.
    #[error("unknown terrain code {code} at {cell}")]
    UnknownCode {
        /// The code read
        code: u8,
        /// Where it was read
        cell: Cell,
    },
}

/// Row-major terrain grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TerrainGrid {
    cells: Vec<TerrainType>,
    rows: usize,
    cols: usize,
}

impl TerrainGrid {
    /// Create a grid with every cell set to `fill`.
    pub fn new(rows: usize, cols: usize, fill: TerrainType) -> Self {
        Self {
            cells: vec![fill; rows * cols],
            rows,
            cols,
        }
    }

    /// Create an all-clear grid.
    pub fn clear(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, TerrainType::Clear)
    }

    /// Build from nested rows of terrain types.
    pub fn from_rows(rows: Vec<Vec<TerrainType>>) -> Result<Self, GridParseError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(GridParseError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * expected);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != expected {
                return Err(GridParseError::Ragged {
                    row,
                    expected,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }

        Ok(Self {
            cells,
            rows: rows.len(),
            cols: expected,
        })
    }

    /// Build from numeric terrain codes (0..=5).
    pub fn from_codes(codes: &[Vec<u8>]) -> Result<Self, GridParseError> {
        let rows = codes
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(col, &code)| {
                        TerrainType::from_code(code).ok_or(GridParseError::UnknownCode {
                            code,
                            cell: Cell::new(row, col),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    /// Parse an ASCII map, one line per row.
    ///
    /// Symbols: `.` clear, `#` obstacle, `R` rover marker, `G` goal marker,
    /// `s` sand, `r` rock. Blank lines and surrounding whitespace are ignored.
    pub fn from_ascii(text: &str) -> Result<Self, GridParseError> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, symbol)| {
                        TerrainType::from_char(symbol).ok_or(GridParseError::UnknownSymbol {
                            symbol,
                            cell: Cell::new(row, col),
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_rows(rows)
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Is the cell inside the grid?
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col
    }

    /// Terrain at `cell`, or `None` when out of bounds.
    #[inline]
    pub fn get(&self, cell: Cell) -> Option<TerrainType> {
        self.contains(cell).then(|| self.cells[self.index(cell)])
    }

    /// Set the terrain at `cell`. Returns false when out of bounds.
    pub fn set(&mut self, cell: Cell, terrain: TerrainType) -> bool {
        if !self.contains(cell) {
            return false;
        }
        let idx = self.index(cell);
        self.cells[idx] = terrain;
        true
    }

    /// Fill the inclusive rectangle spanned by two corners, clipped to the grid.
    pub fn fill_rect(&mut self, from: Cell, to: Cell, terrain: TerrainType) {
        let row_end = from.row.max(to.row).min(self.rows.saturating_sub(1));
        let col_end = from.col.max(to.col).min(self.cols.saturating_sub(1));
        for row in from.row.min(to.row)..=row_end {
            for col in from.col.min(to.col)..=col_end {
                self.set(Cell::new(row, col), terrain);
            }
        }
    }

    /// Turn an entire column into obstacles.
    pub fn obstacle_column(&mut self, col: usize) {
        for row in 0..self.rows {
            self.set(Cell::new(row, col), TerrainType::Obstacle);
        }
    }

    /// In-bounds 8-neighbors of `cell`.
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        cell.neighbors_8().filter(move |n| self.contains(*n))
    }

    /// Iterate over all cells with their terrain, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, TerrainType)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &t)| (Cell::new(i / self.cols, i % self.cols), t))
    }

    /// First cell of `terrain` in row-major order.
    pub fn find(&self, terrain: TerrainType) -> Option<Cell> {
        self.iter().find(|(_, t)| *t == terrain).map(|(cell, _)| cell)
    }

    /// Terrain types present in the grid, deduplicated and sorted.
    pub fn terrain_types(&self) -> Vec<TerrainType> {
        let mut types = self.cells.clone();
        types.sort_unstable();
        types.dedup();
        types
    }

    /// ASCII rendering with the rover drawn at `rover`.
    pub fn render_with_rover(&self, rover: Cell) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let cell = Cell::new(row, col);
                if cell == rover {
                    out.push('@');
                } else {
                    out.push(self.cells[self.index(cell)].as_char());
                }
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.cells[row * self.cols + col].as_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
