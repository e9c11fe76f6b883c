//! Pathfinding configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use super::error::ConfigLoadError;
use crate::pathfinding::{HeuristicKind, PlannerConfig, SearchStrategy};

/// Pathfinding settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PathfindingSection {
    /// Strategy used when none is given explicitly
    #[serde(default)]
    pub strategy: SearchStrategy,

    /// Heuristic for the guided strategies
    #[serde(default)]
    pub heuristic: HeuristicKind,

    /// Terrain weight for energy-efficient search
    #[serde(default = "defaults::energy_weight")]
    pub energy_weight: f32,

    /// Distance of a diagonal move in energy-efficient search (sqrt(2))
    #[serde(default = "defaults::diagonal_cost")]
    pub diagonal_cost: f32,

    /// Maximum nodes to expand
    #[serde(default = "defaults::max_iterations")]
    pub max_iterations: usize,
}

impl Default for PathfindingSection {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            heuristic: HeuristicKind::default(),
            energy_weight: defaults::energy_weight(),
            diagonal_cost: defaults::diagonal_cost(),
            max_iterations: defaults::max_iterations(),
        }
    }
}

impl PathfindingSection {
    /// Convert to a validated PlannerConfig.
    ///
    /// Edge weights must stay non-negative: `energy_weight` finite and >= 0,
    /// `diagonal_cost` finite and >= 1, and at least one expansion allowed.
    pub fn to_planner_config(&self) -> Result<PlannerConfig, ConfigLoadError> {
        if !self.energy_weight.is_finite() || self.energy_weight < 0.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "pathfinding.energy_weight must be finite and >= 0, got {}",
                self.energy_weight
            )));
        }
        if !self.diagonal_cost.is_finite() || self.diagonal_cost < 1.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "pathfinding.diagonal_cost must be finite and >= 1, got {}",
                self.diagonal_cost
            )));
        }
        if self.max_iterations == 0 {
            return Err(ConfigLoadError::Invalid(
                "pathfinding.max_iterations must be > 0".to_string(),
            ));
        }

        Ok(PlannerConfig {
            heuristic: self.heuristic,
            energy_weight: self.energy_weight,
            diagonal_cost: self.diagonal_cost,
            max_iterations: self.max_iterations,
        })
    }
}
