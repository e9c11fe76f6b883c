//! Rover status and step outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rover status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoverStatus {
    /// No path assigned, or waiting for one
    #[default]
    Idle,
    /// Following an assigned path
    Moving,
    /// Reached the last cell of the path
    ReachedGoal,
    /// Not enough energy to enter the next cell
    OutOfEnergy,
    /// Next cell is impassable, or stopped by an emergency stop
    Stuck,
}

impl RoverStatus {
    /// Is this a terminal state? Only `reset` leaves a terminal state.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            RoverStatus::ReachedGoal | RoverStatus::OutOfEnergy | RoverStatus::Stuck
        )
    }

    /// Status name for logging and reports
    pub fn name(self) -> &'static str {
        match self {
            RoverStatus::Idle => "IDLE",
            RoverStatus::Moving => "MOVING",
            RoverStatus::ReachedGoal => "REACHED_GOAL",
            RoverStatus::OutOfEnergy => "OUT_OF_ENERGY",
            RoverStatus::Stuck => "STUCK",
        }
    }
}

impl fmt::Display for RoverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a single [`RoverAgent::step`](super::RoverAgent::step).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved one cell along the path
    Moved,
    /// Moved onto the final cell of the path
    ReachedGoal,
    /// Nothing to do: terminal state, no path, or path exhausted. No state change.
    Ignored,
    /// Next cell is impassable. Rover is now `Stuck`.
    Blocked,
    /// Not enough energy for the next cell. Rover is now `OutOfEnergy`.
    OutOfEnergy,
}

impl StepOutcome {
    /// Did the rover move?
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, StepOutcome::Moved | StepOutcome::ReachedGoal)
    }
}
