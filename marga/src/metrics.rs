//! Read-only metrics and forecasts derived from rover state.
//!
//! Nothing here mutates the rover; every value is recomputed from its
//! path, progress and terrain history on demand.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{TerrainGrid, TerrainType};
use crate::rover::RoverAgent;
use crate::terrain::TerrainCostModel;

/// Path progress report
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PathStats {
    /// Cells in the installed path
    pub total_length: usize,
    /// Cells already entered
    pub completed: usize,
    /// Cells still to enter
    pub remaining: usize,
    /// Remaining cells divided by current speed factor
    pub estimated_time: f32,
}

/// Efficiency report
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EfficiencyReport {
    /// Steps taken per unit of energy spent (energy floored at 1)
    pub energy_efficiency: f32,
    /// Fraction of the path completed
    pub progress_rate: f32,
    /// Current speed factor scaled by steps per path index.
    /// A heuristic ratio, not a time-averaged speed.
    pub average_speed: f32,
    /// Share of each terrain type among visited cells
    pub terrain_distribution: BTreeMap<TerrainType, f32>,
}

/// Normalised frequency of each terrain type in `visited`.
///
/// Empty input gives an empty map; otherwise the values sum to 1.
pub fn terrain_distribution(visited: &[TerrainType]) -> BTreeMap<TerrainType, f32> {
    let mut counts: BTreeMap<TerrainType, usize> = BTreeMap::new();
    for &terrain in visited {
        *counts.entry(terrain).or_insert(0) += 1;
    }
    let total = visited.len() as f32;
    counts
        .into_iter()
        .map(|(terrain, count)| (terrain, count as f32 / total))
        .collect()
}

impl RoverAgent {
    /// Remaining cells divided by current speed; 0 when nothing remains.
    pub fn estimate_completion_time(&self) -> f32 {
        let remaining = self.remaining_path().len();
        if remaining == 0 {
            return 0.0;
        }
        remaining as f32 / self.speed().max(f32::EPSILON)
    }

    /// Can the remaining path be paid for with the current energy?
    ///
    /// Pure forecast over `grid` and `costs`; an impassable remaining cell
    /// makes it unaffordable, an empty remainder is always affordable.
    pub fn can_complete_path(&self, grid: &TerrainGrid, costs: &TerrainCostModel) -> bool {
        let projected: Option<f32> = self
            .remaining_path()
            .iter()
            .map(|&cell| costs.cell_cost(grid, cell).value())
            .sum();
        projected.is_some_and(|needed| needed <= self.energy())
    }

    /// Efficiency report; `None` when no path is installed.
    pub fn efficiency_metrics(&self) -> Option<EfficiencyReport> {
        if self.path().is_empty() {
            return None;
        }

        let distance = self.distance() as f32;
        Some(EfficiencyReport {
            energy_efficiency: distance / self.energy_consumed().max(1.0),
            progress_rate: self.progress_fraction(),
            average_speed: self.speed() * distance / self.path_index().max(1) as f32,
            terrain_distribution: terrain_distribution(self.terrain_visited()),
        })
    }

    /// Is any in-bounds 8-neighbor of the current cell an obstacle?
    pub fn is_near_obstacle(&self, grid: &TerrainGrid) -> bool {
        grid.neighbors(self.position())
            .any(|cell| grid.get(cell).is_some_and(TerrainType::is_obstacle))
    }

    /// Path progress report; `None` when no path is installed.
    pub fn path_stats(&self) -> Option<PathStats> {
        if self.path().is_empty() {
            return None;
        }
        Some(PathStats {
            total_length: self.path().len(),
            completed: self.path_index(),
            remaining: self.remaining_path().len(),
            estimated_time: self.estimate_completion_time(),
        })
    }
}
