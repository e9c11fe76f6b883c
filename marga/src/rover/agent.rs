//! Energy-bounded rover following an assigned path.

use log::{debug, info, warn};

use super::{EmergencyStopReport, RoverStatus, StatusReport, StepOutcome};
use crate::core::{Cell, TerrainGrid, TerrainType};
use crate::terrain::{TerrainCostModel, TraversalCost};

/// Rover state machine.
///
/// The rover owns its occupancy (`position`); the terrain grid is only
/// borrowed, read-only, by [`step`](Self::step) and the query methods.
///
/// ```text
///   Idle ──set_path──► Moving ──step──► ReachedGoal
///                        │  ├─────────► OutOfEnergy
///                        │  └─────────► Stuck
///                        └─emergency_stop─► Stuck
///   any ──reset──► Idle
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RoverAgent {
    // === Construction state ===
    max_energy: f32,
    origin: Cell,
    initial_speed: f32,
    costs: TerrainCostModel,

    // === Mutable state ===
    energy: f32,
    position: Cell,
    status: RoverStatus,
    path: Vec<Cell>,
    path_index: usize,
    distance: usize,
    terrain_visited: Vec<TerrainType>,
    speed: f32,
}

impl RoverAgent {
    /// Create a rover at (0, 0) with full energy and the default cost table.
    ///
    /// Negative or NaN energy is treated as zero.
    pub fn new(initial_energy: f32) -> Self {
        let energy = initial_energy.max(0.0);
        Self {
            max_energy: energy,
            origin: Cell::default(),
            initial_speed: 1.0,
            costs: TerrainCostModel::default(),
            energy,
            position: Cell::default(),
            status: RoverStatus::Idle,
            path: Vec::new(),
            path_index: 0,
            distance: 0,
            terrain_visited: Vec::new(),
            speed: 1.0,
        }
    }

    /// Set the origin cell (also the position `reset` returns to).
    pub fn with_origin(mut self, origin: Cell) -> Self {
        self.origin = origin;
        self.position = origin;
        self
    }

    /// Set the initial movement speed factor.
    ///
    /// Values above 1 are clamped to 1; zero, negative or NaN speeds fall
    /// back to full speed.
    pub fn with_speed(mut self, speed: f32) -> Self {
        let speed = if speed > 0.0 { speed.min(1.0) } else { 1.0 };
        self.initial_speed = speed;
        self.speed = speed;
        self
    }

    /// Use a custom terrain cost table.
    pub fn with_cost_model(mut self, costs: TerrainCostModel) -> Self {
        self.costs = costs;
        self
    }

    /// Install a new path and rewind to its beginning.
    ///
    /// Planner paths include the start cell; when the first cell is the
    /// rover's current position it is already occupied and is dropped.
    /// Status becomes `Moving` when anything is left to traverse.
    ///
    /// Returns false, changing nothing, while the rover is in a terminal
    /// state.
    pub fn set_path(&mut self, path: Vec<Cell>) -> bool {
        if self.status.is_terminal() {
            warn!(
                "[Rover] set_path ignored in terminal state {}; reset first",
                self.status
            );
            return false;
        }

        let mut path = path;
        if path.first() == Some(&self.position) {
            path.remove(0);
        }

        self.path = path;
        self.path_index = 0;
        if !self.path.is_empty() {
            self.status = RoverStatus::Moving;
        }

        debug!(
            "[Rover] Path set: {} cells from {}, status={}",
            self.path.len(),
            self.position,
            self.status
        );
        true
    }

    /// Advance one cell along the path.
    ///
    /// Failures never panic: a terminal state, a missing or exhausted path
    /// gives [`StepOutcome::Ignored`] with no state change; an impassable
    /// cell makes the rover `Stuck`; too little energy makes it
    /// `OutOfEnergy`. Neither failure moves the rover or spends energy.
    pub fn step(&mut self, grid: &TerrainGrid) -> StepOutcome {
        if self.status.is_terminal() || self.path_index >= self.path.len() {
            return StepOutcome::Ignored;
        }

        let next = self.path[self.path_index];
        let Some(terrain) = grid.get(next) else {
            warn!("[Rover] STUCK: next cell {} is outside the grid", next);
            self.status = RoverStatus::Stuck;
            return StepOutcome::Blocked;
        };

        let cost = match self.costs.cost(terrain) {
            TraversalCost::Passable(cost) => cost,
            TraversalCost::Impassable => {
                warn!("[Rover] STUCK: {} at {} is impassable", terrain, next);
                self.status = RoverStatus::Stuck;
                return StepOutcome::Blocked;
            }
        };

        if self.energy < cost {
            warn!(
                "[Rover] OUT_OF_ENERGY at {}: need {:.1} to enter {}, have {:.1}",
                self.position, cost, next, self.energy
            );
            self.status = RoverStatus::OutOfEnergy;
            return StepOutcome::OutOfEnergy;
        }

        self.energy -= cost;
        self.position = next;
        self.distance += 1;
        self.terrain_visited.push(terrain);
        self.speed = self.costs.speed_factor(terrain);
        self.path_index += 1;

        debug!(
            "[Rover] Moved to {} ({}), energy={:.1}, progress={}/{}",
            next,
            terrain,
            self.energy,
            self.path_index,
            self.path.len()
        );

        if self.path_index == self.path.len() {
            info!(
                "[Rover] REACHED_GOAL at {} after {} steps, energy={:.1}",
                self.position, self.distance, self.energy
            );
            self.status = RoverStatus::ReachedGoal;
            StepOutcome::ReachedGoal
        } else {
            self.status = RoverStatus::Moving;
            StepOutcome::Moved
        }
    }

    /// Return to the post-construction state.
    pub fn reset(&mut self) {
        debug!("[Rover] Reset from {} at {}", self.status, self.position);
        self.energy = self.max_energy;
        self.position = self.origin;
        self.status = RoverStatus::Idle;
        self.path.clear();
        self.path_index = 0;
        self.distance = 0;
        self.terrain_visited.clear();
        self.speed = self.initial_speed;
    }

    /// Abort immediately: status becomes `Stuck` whatever it was.
    pub fn emergency_stop(&mut self) -> EmergencyStopReport {
        warn!(
            "[Rover] EMERGENCY STOP at {} (was {}), progress={}/{}",
            self.position,
            self.status,
            self.path_index,
            self.path.len()
        );
        self.status = RoverStatus::Stuck;
        EmergencyStopReport {
            position: self.position,
            energy_remaining: self.energy,
            path_progress_fraction: self.progress_fraction(),
            final_status: self.status,
        }
    }

    /// Snapshot of the current state
    pub fn status_report(&self) -> StatusReport {
        StatusReport {
            position: self.position,
            energy: self.energy,
            status: self.status,
            progress_fraction: self.progress_fraction(),
            distance: self.distance,
            speed: self.speed,
        }
    }

    /// Fraction of the path completed (0 without a path)
    pub fn progress_fraction(&self) -> f32 {
        if self.path.is_empty() {
            0.0
        } else {
            self.path_index as f32 / self.path.len() as f32
        }
    }

    /// Remaining energy
    #[inline]
    pub fn energy(&self) -> f32 {
        self.energy
    }

    /// Initial (and maximum) energy
    #[inline]
    pub fn max_energy(&self) -> f32 {
        self.max_energy
    }

    /// Energy spent since construction or the last reset
    #[inline]
    pub fn energy_consumed(&self) -> f32 {
        self.max_energy - self.energy
    }

    /// Current cell
    #[inline]
    pub fn position(&self) -> Cell {
        self.position
    }

    /// Cell `reset` returns to
    #[inline]
    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// Current status
    #[inline]
    pub fn status(&self) -> RoverStatus {
        self.status
    }

    /// Installed path (cells still to enter plus cells already entered)
    #[inline]
    pub fn path(&self) -> &[Cell] {
        &self.path
    }

    /// Cells not yet entered
    #[inline]
    pub fn remaining_path(&self) -> &[Cell] {
        &self.path[self.path_index.min(self.path.len())..]
    }

    /// Index of the next cell to enter
    #[inline]
    pub fn path_index(&self) -> usize {
        self.path_index
    }

    /// Successful steps taken
    #[inline]
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Terrain of every cell entered, in order
    #[inline]
    pub fn terrain_visited(&self) -> &[TerrainType] {
        &self.terrain_visited
    }

    /// Current speed factor
    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Terrain cost table used for stepping
    #[inline]
    pub fn cost_model(&self) -> &TerrainCostModel {
        &self.costs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cols: usize) -> Vec<Cell> {
        (0..cols).map(|c| Cell::new(0, c)).collect()
    }

    #[test]
    fn test_new_rover_is_idle() {
        let rover = RoverAgent::new(100.0);
        assert_eq!(rover.status(), RoverStatus::Idle);
        assert_eq!(rover.energy(), 100.0);
        assert_eq!(rover.position(), Cell::new(0, 0));
        assert_eq!(rover.speed(), 1.0);
        assert!(rover.path().is_empty());
    }

    #[test]
    fn test_set_path_drops_occupied_start() {
        let mut rover = RoverAgent::new(100.0);
        assert!(rover.set_path(line(4)));
        assert_eq!(rover.path(), &line(4)[1..]);
        assert_eq!(rover.path_index(), 0);
        assert_eq!(rover.status(), RoverStatus::Moving);
    }

    #[test]
    fn test_set_empty_path_keeps_status() {
        let mut rover = RoverAgent::new(100.0);
        rover.set_path(Vec::new());
        assert_eq!(rover.status(), RoverStatus::Idle);

        // Start-only path leaves nothing to traverse
        rover.set_path(vec![Cell::new(0, 0)]);
        assert_eq!(rover.status(), RoverStatus::Idle);
        assert_eq!(rover.step(&TerrainGrid::clear(2, 2)), StepOutcome::Ignored);
    }

    #[test]
    fn test_step_spends_terrain_cost() {
        let grid = TerrainGrid::from_ascii(".sr.").unwrap();
        let mut rover = RoverAgent::new(10.0);
        rover.set_path(line(4));

        assert_eq!(rover.step(&grid), StepOutcome::Moved);
        assert_eq!(rover.energy(), 8.0);
        assert_eq!(rover.speed(), 0.7);

        assert_eq!(rover.step(&grid), StepOutcome::Moved);
        assert_eq!(rover.energy(), 5.0);
        assert_eq!(rover.speed(), 0.5);

        assert_eq!(rover.step(&grid), StepOutcome::ReachedGoal);
        assert_eq!(rover.energy(), 4.0);
        assert_eq!(rover.speed(), 1.0);
        assert_eq!(rover.position(), Cell::new(0, 3));
        assert_eq!(rover.status(), RoverStatus::ReachedGoal);
        assert_eq!(
            rover.terrain_visited(),
            &[TerrainType::Sand, TerrainType::Rock, TerrainType::Clear]
        );

        // Terminal: further steps are no-ops
        assert_eq!(rover.step(&grid), StepOutcome::Ignored);
        assert_eq!(rover.energy(), 4.0);
    }

    #[test]
    fn test_step_into_obstacle_gets_stuck() {
        let grid = TerrainGrid::from_ascii(".#.").unwrap();
        let mut rover = RoverAgent::new(10.0);
        rover.set_path(line(3));

        assert_eq!(rover.step(&grid), StepOutcome::Blocked);
        assert_eq!(rover.status(), RoverStatus::Stuck);
        assert_eq!(rover.energy(), 10.0);
        assert_eq!(rover.position(), Cell::new(0, 0));
        assert_eq!(rover.distance(), 0);
    }

    #[test]
    fn test_step_outside_grid_gets_stuck() {
        let grid = TerrainGrid::clear(1, 2);
        let mut rover = RoverAgent::new(10.0);
        rover.set_path(line(4));

        assert!(rover.step(&grid).is_success());
        assert_eq!(rover.step(&grid), StepOutcome::Blocked);
        assert_eq!(rover.status(), RoverStatus::Stuck);
    }

    #[test]
    fn test_step_without_path_is_ignored() {
        let mut rover = RoverAgent::new(10.0);
        let before = rover.clone();
        assert_eq!(rover.step(&TerrainGrid::clear(3, 3)), StepOutcome::Ignored);
        assert_eq!(rover, before);
    }

    #[test]
    fn test_set_path_rejected_when_terminal() {
        let grid = TerrainGrid::from_ascii(".#").unwrap();
        let mut rover = RoverAgent::new(10.0);
        rover.set_path(line(2));
        rover.step(&grid);
        assert_eq!(rover.status(), RoverStatus::Stuck);

        assert!(!rover.set_path(line(2)));
        assert_eq!(rover.status(), RoverStatus::Stuck);

        rover.reset();
        assert!(rover.set_path(line(2)));
        assert_eq!(rover.status(), RoverStatus::Moving);
    }

    #[test]
    fn test_custom_origin_and_reset() {
        let grid = TerrainGrid::clear(5, 5);
        let origin = Cell::new(2, 2);
        let fresh = RoverAgent::new(50.0).with_origin(origin).with_speed(0.8);
        let mut rover = fresh.clone();

        rover.set_path(vec![origin, Cell::new(3, 3), Cell::new(4, 4)]);
        rover.step(&grid);
        assert_eq!(rover.position(), Cell::new(3, 3));

        rover.reset();
        assert_eq!(rover, fresh);
        assert_eq!(rover.position(), origin);
        assert_eq!(rover.speed(), 0.8);
    }

    #[test]
    fn test_speed_factor_kept_in_range() {
        assert_eq!(RoverAgent::new(10.0).with_speed(0.4).speed(), 0.4);
        assert_eq!(RoverAgent::new(10.0).with_speed(2.5).speed(), 1.0);
        assert_eq!(RoverAgent::new(10.0).with_speed(0.0).speed(), 1.0);
        assert_eq!(RoverAgent::new(10.0).with_speed(-0.3).speed(), 1.0);
        assert_eq!(RoverAgent::new(10.0).with_speed(f32::NAN).speed(), 1.0);

        let mut rover = RoverAgent::new(10.0).with_speed(3.0);
        rover.reset();
        assert_eq!(rover.speed(), 1.0);
    }
}
