//! Default value functions for serde deserialization.

use super::terrain::TerrainSettings;

pub fn plain_ground() -> TerrainSettings {
    TerrainSettings::new(1.0, 1.0)
}

pub fn sand() -> TerrainSettings {
    TerrainSettings::new(2.0, 0.7)
}

pub fn rock() -> TerrainSettings {
    TerrainSettings::new(3.0, 0.5)
}

pub fn energy_weight() -> f32 {
    2.0
}

pub fn diagonal_cost() -> f32 {
    std::f32::consts::SQRT_2
}

pub fn max_iterations() -> usize {
    100_000
}

pub fn initial_energy() -> f32 {
    100.0
}

pub fn speed() -> f32 {
    1.0
}
