//! Least-cost path planning on the terrain grid.
//!
//! Three strategies share one expansion loop over the 8-connected grid:
//!
//! - **Dijkstra**: uniform-cost search, no heuristic. The optimality baseline.
//! - **A\***: terrain cost plus a heuristic. With the default
//!   [`HeuristicKind::ScaledChebyshev`] (`c_min * chebyshev`) it returns
//!   the same cost as Dijkstra while expanding fewer nodes.
//! - **Energy Efficient**: orders the frontier by
//!   `distance + energy_weight * terrain_cost`, trading path length for
//!   lower terrain cost.
//!
//! ```rust,ignore
//! use marga::pathfinding::{PathPlanner, PlannerConfig, SearchStrategy};
//!
//! let planner = PathPlanner::new(&grid, &costs, PlannerConfig::default());
//! let result = planner.compute_path(start, goal, SearchStrategy::AStar);
//! if result.success {
//!     println!("Path found with {} cells, cost {}", result.path.len(), result.cost);
//! }
//! ```

mod planner;
mod types;

pub use planner::PathPlanner;
pub use types::{
    HeuristicKind, PathFailure, PathResult, PlannerConfig, SearchStrategy, StrategyParseError,
};

use crate::core::{Cell, TerrainGrid};
use crate::terrain::TerrainCostModel;

/// Quick planning with default configuration
pub fn compute_path(
    grid: &TerrainGrid,
    costs: &TerrainCostModel,
    start: Cell,
    goal: Cell,
    strategy: SearchStrategy,
) -> PathResult {
    PathPlanner::with_defaults(grid, costs).compute_path(start, goal, strategy)
}

/// Energy needed to follow `path`: the terrain cost of every cell after the
/// first. `None` if any of those cells is impassable or out of bounds.
pub fn path_cost(grid: &TerrainGrid, costs: &TerrainCostModel, path: &[Cell]) -> Option<f32> {
    path.iter()
        .skip(1)
        .map(|&cell| costs.cell_cost(grid, cell).value())
        .sum()
}

/// Check that `path` runs from `start` to `goal` through adjacent,
/// passable cells. An empty path is never valid.
pub fn is_valid_path(grid: &TerrainGrid, path: &[Cell], start: Cell, goal: Cell) -> bool {
    let (Some(first), Some(last)) = (path.first(), path.last()) else {
        return false;
    };
    *first == start
        && *last == goal
        && path.windows(2).all(|w| w[0].is_adjacent(&w[1]))
        && path
            .iter()
            .all(|&c| grid.get(c).is_some_and(|t| !t.is_obstacle()))
}
