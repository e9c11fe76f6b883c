//! Terrain cost table.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::TraversalCost;
use crate::core::{Cell, TerrainGrid, TerrainType};

/// Cost-table invariant violations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CostTableError {
    /// Obstacles must stay impassable.
    #[error("OBSTACLE must be impassable, got cost {0}")]
    PassableObstacle(f32),

    /// Passable costs must be finite and at least 1.
    #[error("{terrain} cost {cost} must be finite and >= 1")]
    InvalidCost {
        /// Terrain with the bad entry
        terrain: TerrainType,
        /// Configured cost
        cost: f32,
    },

    /// Speed factors must lie in (0, 1].
    #[error("{terrain} speed factor {speed} must be in (0, 1]")]
    InvalidSpeed {
        /// Terrain with the bad entry
        terrain: TerrainType,
        /// Configured speed factor
        speed: f32,
    },

    /// Only obstacles may be impassable.
    #[error("{0} cannot be impassable")]
    ImpassableTerrain(TerrainType),
}

/// Cost and speed of one terrain type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainProfile {
    /// Energy spent entering a cell of this terrain
    pub cost: TraversalCost,
    /// Movement speed multiplier after entering it (1.0 = full speed)
    pub speed: f32,
}

impl TerrainProfile {
    /// Passable terrain with the given cost and speed factor
    pub const fn passable(cost: f32, speed: f32) -> Self {
        Self {
            cost: TraversalCost::Passable(cost),
            speed,
        }
    }

    /// Impassable terrain
    pub const fn impassable() -> Self {
        Self {
            cost: TraversalCost::Impassable,
            speed: 0.0,
        }
    }
}

/// Mapping from terrain type to traversal cost and speed factor.
///
/// Default table:
///
/// | Terrain                 | Cost       | Speed |
/// |-------------------------|------------|-------|
/// | CLEAR / ROVER / GOAL    | 1          | 1.0   |
/// | SAND                    | 2          | 0.7   |
/// | ROCKS                   | 3          | 0.5   |
/// | OBSTACLE                | impassable | -     |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CostTable")]
pub struct TerrainCostModel {
    profiles: [TerrainProfile; 6],
}

/// Unvalidated cost table as read from serde.
#[derive(Serialize, Deserialize)]
struct CostTable {
    profiles: [TerrainProfile; 6],
}

impl TryFrom<CostTable> for TerrainCostModel {
    type Error = CostTableError;

    fn try_from(table: CostTable) -> Result<Self, Self::Error> {
        let model = Self {
            profiles: table.profiles,
        };
        model.validate()?;
        Ok(model)
    }
}

impl Default for TerrainCostModel {
    fn default() -> Self {
        Self {
            profiles: [
                TerrainProfile::passable(1.0, 1.0), // Clear
                TerrainProfile::impassable(),       // Obstacle
                TerrainProfile::passable(1.0, 1.0), // RoverMarker
                TerrainProfile::passable(1.0, 1.0), // GoalMarker
                TerrainProfile::passable(2.0, 0.7), // Sand
                TerrainProfile::passable(3.0, 0.5), // Rock
            ],
        }
    }
}

impl TerrainCostModel {
    /// Create the default cost table
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the default table with the given profiles replaced,
    /// validating the result.
    pub fn from_profiles(
        profiles: impl IntoIterator<Item = (TerrainType, TerrainProfile)>,
    ) -> Result<Self, CostTableError> {
        let mut model = Self::default();
        for (terrain, profile) in profiles {
            model.profiles[terrain.code() as usize] = profile;
        }
        model.validate()?;
        Ok(model)
    }

    /// Replace the profile of one terrain type, validating the resulting table.
    pub fn with_profile(
        mut self,
        terrain: TerrainType,
        profile: TerrainProfile,
    ) -> Result<Self, CostTableError> {
        self.profiles[terrain.code() as usize] = profile;
        self.validate()?;
        Ok(self)
    }

    /// Profile of a terrain type
    #[inline]
    pub fn profile(&self, terrain: TerrainType) -> TerrainProfile {
        self.profiles[terrain.code() as usize]
    }

    /// Energy cost of entering a cell of `terrain`
    #[inline]
    pub fn cost(&self, terrain: TerrainType) -> TraversalCost {
        self.profile(terrain).cost
    }

    /// Speed factor after entering a cell of `terrain`
    #[inline]
    pub fn speed_factor(&self, terrain: TerrainType) -> f32 {
        self.profile(terrain).speed
    }

    /// Cost of entering `cell`; out-of-bounds cells are impassable.
    #[inline]
    pub fn cell_cost(&self, grid: &TerrainGrid, cell: Cell) -> TraversalCost {
        grid.get(cell)
            .map(|t| self.cost(t))
            .unwrap_or(TraversalCost::Impassable)
    }

    /// Cheapest passable cost in the table (`c_min`).
    ///
    /// Scaling a Chebyshev distance by this value gives an admissible
    /// heuristic for 8-connected search.
    pub fn min_passable_cost(&self) -> f32 {
        self.profiles
            .iter()
            .filter_map(|p| p.cost.value())
            .fold(f32::INFINITY, f32::min)
    }

    /// Check the table invariants:
    /// OBSTACLE impassable, every other cost finite and >= 1, speeds in (0, 1].
    pub fn validate(&self) -> Result<(), CostTableError> {
        for terrain in TerrainType::ALL {
            let profile = self.profile(terrain);
            match (terrain.is_obstacle(), profile.cost) {
                (true, TraversalCost::Passable(cost)) => {
                    return Err(CostTableError::PassableObstacle(cost));
                }
                (true, TraversalCost::Impassable) => continue,
                (false, TraversalCost::Impassable) => {
                    return Err(CostTableError::ImpassableTerrain(terrain));
                }
                (false, TraversalCost::Passable(cost)) => {
                    if !cost.is_finite() || cost < 1.0 {
                        return Err(CostTableError::InvalidCost { terrain, cost });
                    }
                }
            }
            if !(profile.speed > 0.0 && profile.speed <= 1.0) {
                return Err(CostTableError::InvalidSpeed {
                    terrain,
                    speed: profile.speed,
                });
            }
        }
        Ok(())
    }
}
