//! # Marga: Terrain-Aware Path Planning and Rover Simulation
//!
//! Plans least-cost routes across a 2D terrain grid and drives an
//! energy-bounded rover along them one cell at a time.
//!
//! ## Features
//!
//! - **Three search strategies**: Dijkstra, A* and energy-weighted A* over
//!   an 8-connected grid
//! - **Configurable cost table**: per-terrain energy cost and speed factor,
//!   loadable from YAML
//! - **Rover state machine**: energy accounting, terminal states, emergency stop
//! - **Metrics and telemetry**: progress forecasts and per-mission summaries
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use marga::core::{Cell, TerrainGrid};
//! use marga::pathfinding::{compute_path, SearchStrategy};
//! use marga::rover::RoverAgent;
//! use marga::terrain::TerrainCostModel;
//!
//! let grid = TerrainGrid::from_ascii(
//!     "
//!     R.s..
//!     .##r.
//!     ....G
//!     ",
//! )
//! .unwrap();
//! let costs = TerrainCostModel::default();
//!
//! let result = compute_path(&grid, &costs, Cell::new(0, 0), Cell::new(2, 4), SearchStrategy::AStar);
//! let mut rover = RoverAgent::new(100.0);
//! rover.set_path(result.path);
//! while rover.step(&grid).is_success() {}
//! println!("{} with {:.1} energy left", rover.status(), rover.energy());
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Fundamental types (Cell, TerrainType, TerrainGrid)
//! - [`terrain`]: Terrain cost and speed table
//! - [`pathfinding`]: Least-cost search strategies
//! - [`rover`]: Rover state machine
//! - [`metrics`]: Read-only rover forecasts and efficiency reports
//! - [`telemetry`]: Mission recording and reports
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!     ┌──────────────┐      ┌──────────────────┐
//!     │ TerrainGrid  │      │ TerrainCostModel │◄── MargaConfig (YAML)
//!     └──────┬───────┘      └────────┬─────────┘
//!            │                       │
//!            └───────────┬───────────┘
//!                        ▼
//!               ┌────────────────┐
//!               │  PathPlanner   │  Dijkstra / A* / Energy Efficient
//!               └───────┬────────┘
//!                       │ PathResult.path
//!                       ▼
//!               ┌────────────────┐
//!               │   RoverAgent   │  step() until terminal
//!               └───────┬────────┘
//!                       │
//!            ┌──────────┴──────────┐
//!            ▼                     ▼
//!     ┌──────────────┐    ┌──────────────────┐
//!     │   metrics    │    │ MissionTelemetry │
//!     └──────────────┘    └──────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod metrics;
pub mod pathfinding;
pub mod rover;
pub mod telemetry;
pub mod terrain;

// Re-export main types at crate root
pub use config::{ConfigLoadError, MargaConfig};
pub use crate::core::{Cell, GridParseError, TerrainGrid, TerrainType};
pub use metrics::{EfficiencyReport, PathStats};
pub use pathfinding::{PathPlanner, PathResult, PlannerConfig, SearchStrategy};
pub use rover::{RoverAgent, RoverStatus, StepOutcome};
pub use telemetry::MissionTelemetry;
pub use terrain::{TerrainCostModel, TraversalCost};
