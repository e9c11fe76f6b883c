//! Unified configuration loading for Marga.
//!
//! Loads terrain, pathfinding and rover settings from a single YAML file.
//! Every field is optional; missing values fall back to the built-in defaults.

mod defaults;
mod error;
mod marga;
mod pathfinding;
mod rover;
mod terrain;

// Re-export main types
pub use error::ConfigLoadError;
pub use marga::MargaConfig;

// Re-export section types
pub use pathfinding::PathfindingSection;
pub use rover::RoverSection;
pub use terrain::{TerrainSection, TerrainSettings};
