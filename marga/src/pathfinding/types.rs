//! Path planner types.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::core::Cell;

/// A node in the search frontier
#[derive(Clone, Debug)]
pub(super) struct SearchNode {
    pub cell: Cell,
    pub g_cost: f32, // Cost from start
    pub f_cost: f32, // g_cost + heuristic
}

impl Eq for SearchNode {}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cell == other.cell
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Search strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStrategy {
    /// Uniform-cost search, no heuristic. Always cost-optimal.
    Dijkstra,
    /// Heuristic-guided search over terrain cost.
    #[default]
    #[serde(rename = "astar")]
    AStar,
    /// Heuristic-guided search over `distance + energy_weight * terrain_cost`.
    EnergyEfficient,
}

impl SearchStrategy {
    /// All strategies
    pub const ALL: [SearchStrategy; 3] = [
        SearchStrategy::Dijkstra,
        SearchStrategy::AStar,
        SearchStrategy::EnergyEfficient,
    ];

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            SearchStrategy::Dijkstra => "Dijkstra",
            SearchStrategy::AStar => "A*",
            SearchStrategy::EnergyEfficient => "Energy Efficient",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown strategy name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown search strategy: {0}")]
pub struct StrategyParseError(pub String);

impl FromStr for SearchStrategy {
    type Err = StrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" | "uniform_cost" | "uniform-cost" => Ok(SearchStrategy::Dijkstra),
            "a*" | "astar" | "a_star" => Ok(SearchStrategy::AStar),
            "energy efficient" | "energy_efficient" | "energy-efficient" | "energy" => {
                Ok(SearchStrategy::EnergyEfficient)
            }
            _ => Err(StrategyParseError(s.to_string())),
        }
    }
}

/// Heuristic used by the guided strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    /// Chebyshev distance scaled by the cheapest per-step weight. Admissible.
    #[default]
    ScaledChebyshev,
    /// Unscaled straight-line distance. Overestimates on 8-connected grids
    /// where a diagonal step costs the same as a cardinal one, so paths
    /// found with it may be more expensive than the optimum.
    Euclidean,
}

/// Path planner configuration
#[derive(Clone, Debug)]
pub struct PlannerConfig {
    /// Heuristic for A* and energy-efficient search
    pub heuristic: HeuristicKind,
    /// Weight of terrain cost against distance in energy-efficient search
    pub energy_weight: f32,
    /// Distance of a diagonal move in energy-efficient search (sqrt(2) ≈ 1.414)
    pub diagonal_cost: f32,
    /// Maximum number of nodes to expand before giving up
    pub max_iterations: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            heuristic: HeuristicKind::ScaledChebyshev,
            energy_weight: 2.0,
            diagonal_cost: std::f32::consts::SQRT_2,
            max_iterations: 100_000,
        }
    }
}

impl PlannerConfig {
    /// Set the heuristic
    pub fn with_heuristic(mut self, heuristic: HeuristicKind) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Set the energy weight for energy-efficient search
    pub fn with_energy_weight(mut self, weight: f32) -> Self {
        self.energy_weight = weight;
        self
    }

    /// Set the expansion limit
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a planning request
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Start-inclusive, goal-inclusive path (empty if no path found)
    pub path: Vec<Cell>,
    /// Energy needed to follow the path: terrain cost of every cell after the start
    pub cost: f32,
    /// Value of the strategy's own objective (equals `cost` except for energy-efficient search)
    pub search_cost: f32,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: 0.0,
            search_cost: 0.0,
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Path length in cells
    pub fn length_cells(&self) -> usize {
        self.path.len()
    }

    /// Consume the result, returning the path
    pub fn into_path(self) -> Vec<Cell> {
        self.path
    }
}

/// Reason for path failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start cell is impassable
    StartBlocked,
    /// Goal cell is impassable
    GoalBlocked,
    /// No path exists between start and goal
    NoPath,
    /// Maximum iterations exceeded
    MaxIterationsExceeded,
    /// Start or goal is out of bounds
    OutOfBounds,
}
