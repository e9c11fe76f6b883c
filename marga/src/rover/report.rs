//! Immutable rover snapshots.

use serde::Serialize;

use super::RoverStatus;
use crate::core::Cell;

/// Snapshot returned by [`RoverAgent::status_report`](super::RoverAgent::status_report).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StatusReport {
    /// Current cell
    pub position: Cell,
    /// Remaining energy
    pub energy: f32,
    /// Current status
    pub status: RoverStatus,
    /// Fraction of the path completed (0.0 - 1.0; 0 without a path)
    pub progress_fraction: f32,
    /// Successful steps taken
    pub distance: usize,
    /// Current speed factor
    pub speed: f32,
}

/// Snapshot returned by [`RoverAgent::emergency_stop`](super::RoverAgent::emergency_stop).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmergencyStopReport {
    /// Cell where the rover stopped
    pub position: Cell,
    /// Energy left at the stop
    pub energy_remaining: f32,
    /// Fraction of the path completed at the stop
    pub path_progress_fraction: f32,
    /// Status after the stop (always `Stuck`)
    pub final_status: RoverStatus,
}
