//! Terrain classification codes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Terrain classification of a single grid cell.
///
/// The numeric codes are the ones used by map files and external terrain
/// providers:
/// - `Clear` (0) - open ground
/// - `Obstacle` (1) - impassable
/// - `RoverMarker` (2) - start marker placed by a map author, plain ground
/// - `GoalMarker` (3) - goal marker placed by a map author, plain ground
/// - `Sand` (4) - soft ground, costly and slow
/// - `Rock` (5) - rough ground, most costly passable terrain
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TerrainType {
    /// Open ground
    #[default]
    Clear = 0,

    /// Impassable cell (boulder, crater wall)
    Obstacle = 1,

    /// Rover start marker
    RoverMarker = 2,

    /// Goal marker
    GoalMarker = 3,

    /// Loose sand
    Sand = 4,

    /// Rocky ground
    Rock = 5,
}

impl TerrainType {
    /// All terrain types in code order.
    pub const ALL: [TerrainType; 6] = [
        TerrainType::Clear,
        TerrainType::Obstacle,
        TerrainType::RoverMarker,
        TerrainType::GoalMarker,
        TerrainType::Sand,
        TerrainType::Rock,
    ];

    /// Is this cell an obstacle?
    #[inline]
    pub fn is_obstacle(self) -> bool {
        self == TerrainType::Obstacle
    }

    /// Numeric terrain code
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Convert from a numeric terrain code
    #[inline]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(TerrainType::Clear),
            1 => Some(TerrainType::Obstacle),
            2 => Some(TerrainType::RoverMarker),
            3 => Some(TerrainType::GoalMarker),
            4 => Some(TerrainType::Sand),
            5 => Some(TerrainType::Rock),
            _ => None,
        }
    }

    /// Readable upper-case name
    pub fn name(self) -> &'static str {
        match self {
            TerrainType::Clear => "CLEAR",
            TerrainType::Obstacle => "OBSTACLE",
            TerrainType::RoverMarker => "ROVER",
            TerrainType::GoalMarker => "GOAL",
            TerrainType::Sand => "SAND",
            TerrainType::Rock => "ROCKS",
        }
    }

    /// Single character representation used by ASCII maps
    pub fn as_char(self) -> char {
        match self {
            TerrainType::Clear => '.',
            TerrainType::Obstacle => '#',
            TerrainType::RoverMarker => 'R',
            TerrainType::GoalMarker => 'G',
            TerrainType::Sand => 's',
            TerrainType::Rock => 'r',
        }
    }

    /// Parse an ASCII map character
    pub fn from_char(c: char) -> Option<Self> {
        TerrainType::ALL.into_iter().find(|t| t.as_char() == c)
    }
}

impl fmt::Display for TerrainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
