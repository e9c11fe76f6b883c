//! Grid path planner implementation.

use log::{debug, trace};
use std::collections::{BinaryHeap, HashMap};

use super::path_cost;
use super::types::{HeuristicKind, PathFailure, PathResult, PlannerConfig, SearchNode, SearchStrategy};
use crate::core::{Cell, TerrainGrid};
use crate::terrain::TerrainCostModel;

/// Least-cost path planner over a terrain grid.
pub struct PathPlanner<'a> {
    grid: &'a TerrainGrid,
    costs: &'a TerrainCostModel,
    config: PlannerConfig,
}

impl<'a> PathPlanner<'a> {
    /// Create a new planner
    pub fn new(grid: &'a TerrainGrid, costs: &'a TerrainCostModel, config: PlannerConfig) -> Self {
        Self {
            grid,
            costs,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(grid: &'a TerrainGrid, costs: &'a TerrainCostModel) -> Self {
        Self::new(grid, costs, PlannerConfig::default())
    }

    /// Planner configuration
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Find the least-cost path from `start` to `goal`.
    ///
    /// Unreachability is a normal outcome: the result then holds an empty
    /// path and a [`PathFailure`] reason.
    pub fn compute_path(&self, start: Cell, goal: Cell, strategy: SearchStrategy) -> PathResult {
        trace!(
            "[Planner] compute_path: start={} goal={} strategy={}",
            start, goal, strategy
        );

        if !self.grid.contains(start) || !self.grid.contains(goal) {
            debug!("[Planner] FAILED: OutOfBounds - start or goal outside grid");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        }
        if !self.costs.cell_cost(self.grid, start).is_passable() {
            debug!("[Planner] FAILED: StartBlocked at {}", start);
            return PathResult::failed(PathFailure::StartBlocked, 0);
        }
        if !self.costs.cell_cost(self.grid, goal).is_passable() {
            debug!("[Planner] FAILED: GoalBlocked at {}", goal);
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

        let min_step = self.min_step_weight(strategy);

        let mut open_set = BinaryHeap::new();
        let mut came_from: HashMap<Cell, Cell> = HashMap::new();
        let mut g_scores: HashMap<Cell, f32> = HashMap::new();

        open_set.push(SearchNode {
            cell: start,
            g_cost: 0.0,
            f_cost: self.heuristic(strategy, min_step, start, goal),
        });
        g_scores.insert(start, 0.0);

        let mut nodes_expanded = 0;

        while let Some(current) = open_set.pop() {
            // Skip stale entries superseded by a cheaper route
            let best = g_scores.get(&current.cell).copied().unwrap_or(f32::INFINITY);
            if current.g_cost > best {
                continue;
            }

            nodes_expanded += 1;
            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[Planner] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::MaxIterationsExceeded, nodes_expanded);
            }

            // Goal reached
            if current.cell == goal {
                return self.reconstruct_path(&came_from, start, goal, current.g_cost, nodes_expanded);
            }

            for neighbor in self.grid.neighbors(current.cell) {
                let Some(terrain_cost) = self.costs.cell_cost(self.grid, neighbor).value() else {
                    continue;
                };

                let tentative_g =
                    current.g_cost + self.edge_weight(strategy, current.cell, neighbor, terrain_cost);

                let known_g = g_scores.get(&neighbor).copied().unwrap_or(f32::INFINITY);
                if tentative_g < known_g {
                    came_from.insert(neighbor, current.cell);
                    g_scores.insert(neighbor, tentative_g);

                    let h = self.heuristic(strategy, min_step, neighbor, goal);
                    open_set.push(SearchNode {
                        cell: neighbor,
                        g_cost: tentative_g,
                        f_cost: tentative_g + h,
                    });
                }
            }
        }

        debug!(
            "[Planner] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Weight of the edge `from -> to` under `strategy`.
    fn edge_weight(&self, strategy: SearchStrategy, from: Cell, to: Cell, terrain_cost: f32) -> f32 {
        match strategy {
            SearchStrategy::Dijkstra | SearchStrategy::AStar => terrain_cost,
            SearchStrategy::EnergyEfficient => {
                let distance = if from.is_diagonal_to(&to) {
                    self.config.diagonal_cost
                } else {
                    1.0
                };
                distance + self.config.energy_weight * terrain_cost
            }
        }
    }

    /// Lower bound on the weight of any single step under `strategy`.
    fn min_step_weight(&self, strategy: SearchStrategy) -> f32 {
        let c_min = self.costs.min_passable_cost();
        match strategy {
            SearchStrategy::Dijkstra | SearchStrategy::AStar => c_min,
            SearchStrategy::EnergyEfficient => 1.0 + self.config.energy_weight * c_min,
        }
    }

    /// Heuristic estimate of the remaining cost from `from` to `goal`.
    fn heuristic(&self, strategy: SearchStrategy, min_step: f32, from: Cell, goal: Cell) -> f32 {
        if strategy == SearchStrategy::Dijkstra {
            return 0.0;
        }
        match self.config.heuristic {
            // Every step reduces Chebyshev distance by at most one
            HeuristicKind::ScaledChebyshev => min_step * from.chebyshev_distance(&goal) as f32,
            HeuristicKind::Euclidean => from.euclidean_distance(&goal),
        }
    }

    /// Rebuild the path by walking predecessors back from the goal.
    fn reconstruct_path(
        &self,
        came_from: &HashMap<Cell, Cell>,
        start: Cell,
        goal: Cell,
        search_cost: f32,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut path = vec![goal];
        let mut current = goal;
        while current != start {
            match came_from.get(&current) {
                Some(&prev) => {
                    path.push(prev);
                    current = prev;
                }
                None => break,
            }
        }
        path.reverse();

        let cost = path_cost(self.grid, self.costs, &path).unwrap_or(search_cost);

        trace!(
            "[Planner] SUCCESS: path length={} cells, cost={:.2}, search_cost={:.2}, nodes_expanded={}",
            path.len(),
            cost,
            search_cost,
            nodes_expanded
        );

        PathResult {
            path,
            cost,
            search_cost,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}
