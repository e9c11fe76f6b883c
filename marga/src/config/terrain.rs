//! Terrain cost table configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::core::TerrainType;
use crate::terrain::{CostTableError, TerrainCostModel, TerrainProfile};

/// Cost and speed of one passable terrain type
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TerrainSettings {
    /// Energy per step (finite, >= 1)
    pub cost: f32,
    /// Speed factor (0, 1]
    pub speed: f32,
}

impl TerrainSettings {
    /// Create terrain settings
    pub const fn new(cost: f32, speed: f32) -> Self {
        Self { cost, speed }
    }

    fn to_profile(self) -> TerrainProfile {
        TerrainProfile::passable(self.cost, self.speed)
    }
}

/// Terrain settings section.
///
/// OBSTACLE has no entry: it is always impassable.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TerrainSection {
    /// Open ground
    #[serde(default = "defaults::plain_ground")]
    pub clear: TerrainSettings,

    /// Rover start marker
    #[serde(default = "defaults::plain_ground")]
    pub rover_marker: TerrainSettings,

    /// Goal marker
    #[serde(default = "defaults::plain_ground")]
    pub goal_marker: TerrainSettings,

    /// Loose sand
    #[serde(default = "defaults::sand")]
    pub sand: TerrainSettings,

    /// Rocky ground
    #[serde(default = "defaults::rock")]
    pub rock: TerrainSettings,
}

impl Default for TerrainSection {
    fn default() -> Self {
        Self {
            clear: defaults::plain_ground(),
            rover_marker: defaults::plain_ground(),
            goal_marker: defaults::plain_ground(),
            sand: defaults::sand(),
            rock: defaults::rock(),
        }
    }
}

impl TerrainSection {
    /// Build the validated cost table
    pub fn to_cost_model(&self) -> Result<TerrainCostModel, CostTableError> {
        TerrainCostModel::from_profiles([
            (TerrainType::Clear, self.clear.to_profile()),
            (TerrainType::RoverMarker, self.rover_marker.to_profile()),
            (TerrainType::GoalMarker, self.goal_marker.to_profile()),
            (TerrainType::Sand, self.sand.to_profile()),
            (TerrainType::Rock, self.rock.to_profile()),
        ])
    }
}
