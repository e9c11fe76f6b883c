//! Mission summaries produced by [`MissionTelemetry`](super::MissionTelemetry).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{Cell, TerrainType};

/// Summary of one finished mission.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MissionRecord {
    /// Mission identifier
    pub mission_id: String,
    /// Whether the mission reached its goal
    pub success: bool,
    /// Number of recorded movements
    pub total_distance: usize,
    /// Initial energy minus the lowest recorded level, floored at 0
    pub energy_consumed: f32,
    /// Recorded positions in order
    pub path: Vec<Cell>,
    /// Share of each terrain type among recorded movements
    pub terrain_distribution: BTreeMap<TerrainType, f32>,
    /// Mean recorded speed factor
    pub average_speed: f32,
}

impl MissionRecord {
    /// Energy per recorded step; a zero-distance mission counts as one step.
    pub fn energy_per_step(&self) -> f32 {
        self.energy_consumed / self.total_distance.max(1) as f32
    }
}

/// Aggregate over all finished missions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MissionReport {
    pub total_missions: usize,
    /// Percentage of successful missions (0 - 100)
    pub success_rate: f32,
    pub average_energy_consumption: f32,
    pub average_distance: f32,
    /// Every finished mission, oldest first
    pub mission_history: Vec<MissionRecord>,
}

/// Performance summary; all zeros when no mission has finished.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct PerformanceMetrics {
    /// Percentage of successful missions (0 - 100)
    pub success_rate: f32,
    /// Mean of per-mission energy per step
    pub avg_energy_per_step: f32,
    pub avg_mission_distance: f32,
    pub total_missions: usize,
    /// Largest recorded distance
    pub longest_mission: usize,
    /// Mission with the lowest energy per step (first one on ties)
    pub most_efficient_mission: Option<String>,
}
