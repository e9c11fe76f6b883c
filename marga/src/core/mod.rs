//! Core types for the marga planner and rover.
//!
//! - [`Cell`]: grid coordinate (row, col)
//! - [`TerrainType`]: per-cell terrain classification
//! - [`TerrainGrid`]: read-only rectangular terrain layer

mod cell;
mod grid;
mod terrain;

pub use cell::{Cell, NEIGHBOR_OFFSETS};
pub use grid::{GridParseError, TerrainGrid};
pub use terrain::TerrainType;
