//! Headless rover simulation.
//!
//! Plans a path across an ASCII terrain map, drives the rover along it
//! until it stops, and prints the outcome.
//!
//! Usage:
//!   cargo run --bin marga-sim -- --map data/maps/crater_field.txt
//!   cargo run --bin marga-sim -- --map data/maps/crater_field.txt --strategy dijkstra
//!   cargo run --bin marga-sim -- --map my_map.txt --start 0,0 --goal 9,14 --config configs/marga.yaml
//!
//! Map symbols: `.` clear, `#` obstacle, `R` rover, `G` goal, `s` sand, `r` rock.
//! Start and goal default to the `R` and `G` markers.
//!
//! Exits with 0 when the rover reaches the goal, 1 otherwise.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::{error, info};

use marga::{
    Cell, MargaConfig, MissionTelemetry, PathPlanner, RoverStatus, SearchStrategy, TerrainGrid,
    TerrainType,
};

/// Headless rover simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// ASCII terrain map
    #[arg(short, long)]
    map: PathBuf,

    /// Configuration file path (defaults to configs/marga.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Search strategy: dijkstra, astar or energy_efficient (overrides config)
    #[arg(short, long)]
    strategy: Option<SearchStrategy>,

    /// Start cell as "row,col" (defaults to the R marker)
    #[arg(long, value_parser = parse_cell)]
    start: Option<Cell>,

    /// Goal cell as "row,col" (defaults to the G marker)
    #[arg(long, value_parser = parse_cell)]
    goal: Option<Cell>,

    /// Stop after this many steps
    #[arg(long, default_value_t = 10_000)]
    max_steps: usize,
}

fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got '{}'", s))?;
    let row = row.trim().parse().map_err(|e| format!("bad row: {}", e))?;
    let col = col.trim().parse().map_err(|e| format!("bad col: {}", e))?;
    Ok(Cell::new(row, col))
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(RoverStatus::ReachedGoal) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<RoverStatus, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => MargaConfig::load(path)?,
        None => MargaConfig::load_default()?,
    };

    let text = std::fs::read_to_string(&args.map)?;
    let grid = TerrainGrid::from_ascii(&text)?;
    info!(
        "[Sim] Loaded {}x{} map from {}",
        grid.rows(),
        grid.cols(),
        args.map.display()
    );

    let start = args
        .start
        .or_else(|| grid.find(TerrainType::RoverMarker))
        .unwrap_or(config.rover.origin);
    let goal = args
        .goal
        .or_else(|| grid.find(TerrainType::GoalMarker))
        .ok_or("no goal given and the map has no G marker")?;
    let strategy = args.strategy.unwrap_or(config.pathfinding.strategy);

    let costs = config.to_cost_model()?;
    let planner = PathPlanner::new(&grid, &costs, config.to_planner_config()?);
    let result = planner.compute_path(start, goal, strategy);
    if !result.success {
        println!(
            "{}: no path from {} to {} ({:?})",
            strategy, start, goal, result.failure_reason
        );
        return Ok(RoverStatus::Idle);
    }
    println!(
        "{}: {} cells, energy {:.1}, {} nodes expanded",
        strategy,
        result.path.len(),
        result.cost,
        result.nodes_expanded
    );

    let mut rover = config.to_rover()?.with_origin(start);
    let mut telemetry = MissionTelemetry::new();
    telemetry.start_mission(format!("{}-{}", strategy.name(), goal), rover.energy());
    rover.set_path(result.path);

    let mut steps = 0;
    while steps < args.max_steps && rover.step(&grid).is_success() {
        telemetry.record_step(&rover);
        steps += 1;
    }
    if !rover.status().is_terminal() {
        rover.emergency_stop();
    }
    let status = rover.status();
    telemetry.end_mission(status == RoverStatus::ReachedGoal);

    println!("\n{}", grid.render_with_rover(rover.position()));
    println!("=== Final Status ===");
    println!("  Status:    {}", status);
    println!("  Position:  {}", rover.position());
    println!("  Energy:    {:.1} / {:.1}", rover.energy(), rover.max_energy());
    println!("  Distance:  {}", rover.distance());

    if let Some(stats) = rover.path_stats() {
        println!("\n=== Path Stats ===");
        println!("  Completed: {}/{}", stats.completed, stats.total_length);
        println!("  Remaining: {} (est. time {:.1})", stats.remaining, stats.estimated_time);
    }

    if let Some(report) = rover.efficiency_metrics() {
        println!("\n=== Efficiency ===");
        println!("  Energy efficiency: {:.3} steps/energy", report.energy_efficiency);
        println!("  Progress:          {:.1}%", report.progress_rate * 100.0);
        println!("  Average speed:     {:.2}", report.average_speed);
        for (terrain, share) in &report.terrain_distribution {
            println!("  {:>8}: {:.1}%", terrain.name(), share * 100.0);
        }
    }

    let metrics = telemetry.performance_metrics();
    if metrics.total_missions > 0 {
        println!("\n=== Telemetry ===");
        println!("  Energy per step: {:.2}", metrics.avg_energy_per_step);
        println!("  Success rate:    {:.0}%", metrics.success_rate);
    }

    Ok(status)
}
