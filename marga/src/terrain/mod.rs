//! Terrain cost model.
//!
//! Pure mapping from [`TerrainType`](crate::core::TerrainType) to the energy
//! spent entering a cell and the speed factor the rover moves at afterwards.
//! The planner and the rover both read costs through [`TerrainCostModel`], so
//! overriding the table (see [`crate::config`]) changes neither of them.

mod cost;
mod model;

pub use cost::TraversalCost;
pub use model::{CostTableError, TerrainCostModel, TerrainProfile};
