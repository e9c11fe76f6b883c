//! Rover configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::core::Cell;

/// Rover settings section
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RoverSection {
    /// Initial (and maximum) energy
    #[serde(default = "defaults::initial_energy")]
    pub initial_energy: f32,

    /// Start cell, also where reset returns the rover
    #[serde(default)]
    pub origin: Cell,

    /// Speed factor before the first step
    #[serde(default = "defaults::speed")]
    pub speed: f32,
}

impl Default for RoverSection {
    fn default() -> Self {
        Self {
            initial_energy: defaults::initial_energy(),
            origin: Cell::default(),
            speed: defaults::speed(),
        }
    }
}
