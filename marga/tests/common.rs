//! Test utilities for Marga integration tests.
//!
//! Grid builders and seeded random terrain for property checks.

#![allow(dead_code)]

use marga::core::{Cell, TerrainGrid, TerrainType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Straight diagonal from (0, 0) to (n-1, n-1).
pub fn diagonal_path(n: usize) -> Vec<Cell> {
    (0..n).map(|i| Cell::new(i, i)).collect()
}

/// Horizontal path along row 0 covering columns 0..n.
pub fn row_path(n: usize) -> Vec<Cell> {
    (0..n).map(|c| Cell::new(0, c)).collect()
}

/// Grid with a full obstacle column splitting it in two.
pub fn walled_grid(rows: usize, cols: usize, wall_col: usize) -> TerrainGrid {
    let mut grid = TerrainGrid::clear(rows, cols);
    grid.obstacle_column(wall_col);
    grid
}

/// Random mixed terrain with the corners kept clear.
///
/// Roughly 50% clear, 20% sand, 15% rock, 15% obstacle.
pub fn random_grid(rng: &mut StdRng, rows: usize, cols: usize) -> TerrainGrid {
    let mut grid = TerrainGrid::clear(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let terrain = match rng.random_range(0..100) {
                0..=49 => TerrainType::Clear,
                50..=69 => TerrainType::Sand,
                70..=84 => TerrainType::Rock,
                _ => TerrainType::Obstacle,
            };
            grid.set(Cell::new(row, col), terrain);
        }
    }
    grid.set(Cell::new(0, 0), TerrainType::Clear);
    grid.set(Cell::new(rows - 1, cols - 1), TerrainType::Clear);
    grid
}

/// Seeded RNG so property failures are reproducible.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
