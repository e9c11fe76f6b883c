//! In-memory mission telemetry.
//!
//! Records one sample per rover movement while a mission is active and
//! keeps a summary of every finished mission for reporting.
//!
//! ```rust,ignore
//! let mut telemetry = MissionTelemetry::new();
//! telemetry.start_mission("survey-1", rover.energy());
//! while rover.step(&grid).is_success() {
//!     telemetry.record_step(&rover);
//! }
//! telemetry.end_mission(rover.status() == RoverStatus::ReachedGoal);
//! ```

mod record;

pub use record::{MissionRecord, MissionReport, PerformanceMetrics};

use log::{debug, info, warn};

use crate::core::{Cell, TerrainType};
use crate::metrics::terrain_distribution;
use crate::rover::RoverAgent;

/// Samples of the mission in progress.
#[derive(Clone, Debug)]
struct ActiveMission {
    id: String,
    initial_energy: f32,
    path: Vec<Cell>,
    energy_levels: Vec<f32>,
    terrain_types: Vec<TerrainType>,
    speeds: Vec<f32>,
}

/// Mission recorder and history.
#[derive(Clone, Debug, Default)]
pub struct MissionTelemetry {
    current: Option<ActiveMission>,
    history: Vec<MissionRecord>,
}

impl MissionTelemetry {
    /// Create an empty recorder
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a new mission, discarding any unfinished one.
    pub fn start_mission(&mut self, id: impl Into<String>, initial_energy: f32) {
        let id = id.into();
        if let Some(previous) = &self.current {
            warn!(
                "[Telemetry] Mission '{}' replaced before it ended ({} samples dropped)",
                previous.id,
                previous.path.len()
            );
        }
        debug!("[Telemetry] Mission '{}' started, energy={:.1}", id, initial_energy);
        self.current = Some(ActiveMission {
            id,
            initial_energy,
            path: Vec::new(),
            energy_levels: Vec::new(),
            terrain_types: Vec::new(),
            speeds: Vec::new(),
        });
    }

    /// Is a mission being recorded?
    pub fn is_recording(&self) -> bool {
        self.current.is_some()
    }

    /// Record one movement sample. Ignored when no mission is active.
    pub fn record_movement(&mut self, position: Cell, energy: f32, terrain: TerrainType, speed: f32) {
        let Some(mission) = self.current.as_mut() else {
            debug!("[Telemetry] Movement to {} ignored: no active mission", position);
            return;
        };
        mission.path.push(position);
        mission.energy_levels.push(energy);
        mission.terrain_types.push(terrain);
        mission.speeds.push(speed);
    }

    /// Record the rover's current state after a step.
    ///
    /// The terrain is the last one the rover entered (CLEAR before its
    /// first move).
    pub fn record_step(&mut self, rover: &RoverAgent) {
        let terrain = rover.terrain_visited().last().copied().unwrap_or_default();
        self.record_movement(rover.position(), rover.energy(), terrain, rover.speed());
    }

    /// Energy levels recorded so far in the active mission.
    pub fn energy_series(&self) -> &[f32] {
        self.current
            .as_ref()
            .map(|m| m.energy_levels.as_slice())
            .unwrap_or(&[])
    }

    /// Finish the active mission and add its summary to the history.
    ///
    /// Returns `None`, recording nothing, when no mission is active or no
    /// movement was recorded.
    pub fn end_mission(&mut self, success: bool) -> Option<MissionRecord> {
        let mission = self.current.take()?;
        if mission.path.is_empty() {
            debug!("[Telemetry] Mission '{}' ended with no movement", mission.id);
            return None;
        }

        let lowest = mission
            .energy_levels
            .iter()
            .copied()
            .fold(f32::INFINITY, f32::min);
        let record = MissionRecord {
            mission_id: mission.id,
            success,
            total_distance: mission.path.len(),
            energy_consumed: (mission.initial_energy - lowest).max(0.0),
            terrain_distribution: terrain_distribution(&mission.terrain_types),
            average_speed: mean(mission.speeds.iter().copied()),
            path: mission.path,
        };

        info!(
            "[Telemetry] Mission '{}' ended: success={}, distance={}, energy={:.1}",
            record.mission_id, record.success, record.total_distance, record.energy_consumed
        );
        self.history.push(record.clone());
        Some(record)
    }

    /// Finished missions, oldest first
    pub fn history(&self) -> &[MissionRecord] {
        &self.history
    }

    /// Aggregate report; `None` before the first mission has finished.
    pub fn mission_report(&self) -> Option<MissionReport> {
        if self.history.is_empty() {
            return None;
        }
        Some(MissionReport {
            total_missions: self.history.len(),
            success_rate: self.success_rate(),
            average_energy_consumption: mean(self.history.iter().map(|m| m.energy_consumed)),
            average_distance: mean(self.history.iter().map(|m| m.total_distance as f32)),
            mission_history: self.history.clone(),
        })
    }

    /// Performance summary over all finished missions.
    pub fn performance_metrics(&self) -> PerformanceMetrics {
        if self.history.is_empty() {
            return PerformanceMetrics::default();
        }

        let most_efficient = self
            .history
            .iter()
            .fold(None::<&MissionRecord>, |best, m| match best {
                Some(b) if b.energy_per_step() <= m.energy_per_step() => Some(b),
                _ => Some(m),
            })
            .map(|m| m.mission_id.clone());

        PerformanceMetrics {
            success_rate: self.success_rate(),
            avg_energy_per_step: mean(self.history.iter().map(MissionRecord::energy_per_step)),
            avg_mission_distance: mean(self.history.iter().map(|m| m.total_distance as f32)),
            total_missions: self.history.len(),
            longest_mission: self
                .history
                .iter()
                .map(|m| m.total_distance)
                .max()
                .unwrap_or(0),
            most_efficient_mission: most_efficient,
        }
    }

    /// Drop the active mission and all history
    pub fn clear(&mut self) {
        self.current = None;
        self.history.clear();
    }

    fn success_rate(&self) -> f32 {
        let successes = self.history.iter().filter(|m| m.success).count();
        100.0 * successes as f32 / self.history.len().max(1) as f32
    }
}

/// Arithmetic mean; 0 for an empty sequence.
fn mean(values: impl Iterator<Item = f32>) -> f32 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 {
        0.0
    } else {
        sum / count as f32
    }
}
