//! End-to-end planner and rover scenarios.

mod common;

use approx::assert_relative_eq;
use common::{diagonal_path, row_path, walled_grid};
use marga::core::{Cell, TerrainGrid};
use marga::pathfinding::{compute_path, is_valid_path, PathFailure, SearchStrategy};
use marga::rover::{RoverAgent, RoverStatus, StepOutcome};
use marga::terrain::TerrainCostModel;

#[test]
fn test_open_grid_diagonal_run() {
    let grid = TerrainGrid::clear(5, 5);
    let costs = TerrainCostModel::default();
    let start = Cell::new(0, 0);
    let goal = Cell::new(4, 4);

    let result = compute_path(&grid, &costs, start, goal, SearchStrategy::AStar);
    assert!(result.success);
    assert_eq!(result.path, diagonal_path(5));
    assert_relative_eq!(result.cost, 4.0);

    let mut rover = RoverAgent::new(100.0);
    assert!(rover.set_path(result.path));
    let outcomes: Vec<StepOutcome> = (0..4).map(|_| rover.step(&grid)).collect();

    assert_eq!(
        outcomes,
        vec![
            StepOutcome::Moved,
            StepOutcome::Moved,
            StepOutcome::Moved,
            StepOutcome::ReachedGoal
        ]
    );
    assert_eq!(rover.status(), RoverStatus::ReachedGoal);
    assert_relative_eq!(rover.energy(), 96.0);
    assert_eq!(rover.position(), goal);
    assert_eq!(rover.step(&grid), StepOutcome::Ignored);
}

#[test]
fn test_wall_leaves_rover_idle() {
    let grid = walled_grid(5, 5, 2);
    let costs = TerrainCostModel::default();

    for strategy in SearchStrategy::ALL {
        let result = compute_path(&grid, &costs, Cell::new(0, 0), Cell::new(4, 4), strategy);
        assert!(!result.success, "{} crossed a wall", strategy);
        assert!(result.path.is_empty());
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));

        let mut rover = RoverAgent::new(100.0);
        rover.set_path(result.path);
        assert_eq!(rover.step(&grid), StepOutcome::Ignored);
        assert_eq!(rover.status(), RoverStatus::Idle);
        assert_eq!(rover.energy(), 100.0);
    }
}

#[test]
fn test_insufficient_energy_for_rock() {
    let grid = TerrainGrid::from_ascii(".r").unwrap();
    let mut rover = RoverAgent::new(2.0);
    rover.set_path(row_path(2));

    assert_eq!(rover.step(&grid), StepOutcome::OutOfEnergy);
    assert!(!rover.step(&grid).is_success());
    assert_eq!(rover.status(), RoverStatus::OutOfEnergy);
    assert_eq!(rover.energy(), 2.0);
    assert_eq!(rover.position(), Cell::new(0, 0));
    assert_eq!(rover.distance(), 0);
}

#[test]
fn test_emergency_stop_mid_path() {
    let grid = TerrainGrid::clear(5, 5);
    let mut rover = RoverAgent::new(100.0);
    rover.set_path(diagonal_path(5));
    rover.step(&grid);
    rover.step(&grid);
    assert_eq!(rover.status(), RoverStatus::Moving);

    let expected_progress = rover.path_index() as f32 / rover.path().len() as f32;
    let report = rover.emergency_stop();

    assert_eq!(report.final_status, RoverStatus::Stuck);
    assert_eq!(rover.status(), RoverStatus::Stuck);
    assert_relative_eq!(report.path_progress_fraction, expected_progress);
    assert_relative_eq!(report.path_progress_fraction, 0.5);
    assert_eq!(report.position, Cell::new(2, 2));
    assert_relative_eq!(report.energy_remaining, 98.0);

    assert_eq!(rover.step(&grid), StepOutcome::Ignored);
    assert!(!rover.set_path(diagonal_path(5)));
}

#[test]
fn test_emergency_stop_overrides_terminal_status() {
    let grid = TerrainGrid::clear(2, 2);
    let mut rover = RoverAgent::new(10.0);
    rover.set_path(diagonal_path(2));
    rover.step(&grid);
    assert_eq!(rover.status(), RoverStatus::ReachedGoal);

    let report = rover.emergency_stop();
    assert_eq!(report.final_status, RoverStatus::Stuck);
    assert_relative_eq!(report.path_progress_fraction, 1.0);
}

#[test]
fn test_sample_maps() {
    env_logger::try_init().ok();
    let costs = TerrainCostModel::default();

    let grid = TerrainGrid::from_ascii(include_str!("../data/maps/crater_field.txt")).unwrap();
    let start = grid.find(marga::TerrainType::RoverMarker).unwrap();
    let goal = grid.find(marga::TerrainType::GoalMarker).unwrap();
    for strategy in SearchStrategy::ALL {
        let result = compute_path(&grid, &costs, start, goal, strategy);
        assert!(result.success, "{} failed on crater_field", strategy);
        assert!(is_valid_path(&grid, &result.path, start, goal));

        let mut rover = RoverAgent::new(100.0).with_origin(start);
        rover.set_path(result.path);
        while rover.step(&grid).is_success() {}
        assert_eq!(rover.status(), RoverStatus::ReachedGoal);
        assert_relative_eq!(rover.energy(), 100.0 - result.cost, epsilon = 1e-4);
    }

    let grid = TerrainGrid::from_ascii(include_str!("../data/maps/walled.txt")).unwrap();
    let start = grid.find(marga::TerrainType::RoverMarker).unwrap();
    let goal = grid.find(marga::TerrainType::GoalMarker).unwrap();
    let result = compute_path(&grid, &costs, start, goal, SearchStrategy::Dijkstra);
    assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
}

#[test]
fn test_stuck_on_obstacle_in_stale_path() {
    let mut grid = TerrainGrid::clear(1, 4);
    let costs = TerrainCostModel::default();
    let result = compute_path(&grid, &costs, Cell::new(0, 0), Cell::new(0, 3), SearchStrategy::Dijkstra);

    // Terrain changed after planning.
    grid.set(Cell::new(0, 2), marga::TerrainType::Obstacle);

    let mut rover = RoverAgent::new(10.0);
    rover.set_path(result.path);
    assert_eq!(rover.step(&grid), StepOutcome::Moved);
    assert_eq!(rover.step(&grid), StepOutcome::Blocked);
    assert_eq!(rover.status(), RoverStatus::Stuck);
    assert_eq!(rover.position(), Cell::new(0, 1));
    assert_relative_eq!(rover.energy(), 9.0);
}
