//! Benchmark search strategies on mixed terrain.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use marga::{Cell, PathPlanner, RoverAgent, SearchStrategy, TerrainCostModel, TerrainGrid, TerrainType};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Mixed terrain with corners kept clear.
fn terrain_field(size: usize, seed: u64) -> TerrainGrid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = TerrainGrid::clear(size, size);
    for row in 0..size {
        for col in 0..size {
            let terrain = match rng.random_range(0..100) {
                0..=59 => TerrainType::Clear,
                60..=74 => TerrainType::Sand,
                75..=89 => TerrainType::Rock,
                _ => TerrainType::Obstacle,
            };
            grid.set(Cell::new(row, col), terrain);
        }
    }
    grid.set(Cell::new(0, 0), TerrainType::Clear);
    grid.set(Cell::new(size - 1, size - 1), TerrainType::Clear);
    grid
}

fn bench_strategies(c: &mut Criterion) {
    let costs = TerrainCostModel::default();
    let mut group = c.benchmark_group("compute_path");

    for size in [32, 64, 128] {
        let grid = terrain_field(size, 42);
        let planner = PathPlanner::with_defaults(&grid, &costs);
        let start = Cell::new(0, 0);
        let goal = Cell::new(size - 1, size - 1);

        for strategy in SearchStrategy::ALL {
            group.bench_with_input(
                BenchmarkId::new(strategy.name(), size),
                &strategy,
                |b, &strategy| {
                    b.iter(|| {
                        let result = planner.compute_path(black_box(start), black_box(goal), strategy);
                        black_box(result)
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_rover_run(c: &mut Criterion) {
    let costs = TerrainCostModel::default();
    let grid = terrain_field(64, 7);
    let path = PathPlanner::with_defaults(&grid, &costs)
        .compute_path(Cell::new(0, 0), Cell::new(63, 63), SearchStrategy::AStar)
        .into_path();

    c.bench_function("rover_follow_path_64", |b| {
        b.iter(|| {
            let mut rover = RoverAgent::new(1_000.0);
            rover.set_path(path.clone());
            while rover.step(black_box(&grid)).is_success() {}
            black_box(rover.status())
        })
    });
}

criterion_group!(benches, bench_strategies, bench_rover_run);
criterion_main!(benches);
