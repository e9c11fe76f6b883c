//! Main MargaConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pathfinding::PlannerConfig;
use crate::rover::RoverAgent;
use crate::terrain::TerrainCostModel;

use super::error::ConfigLoadError;
use super::pathfinding::PathfindingSection;
use super::rover::RoverSection;
use super::terrain::TerrainSection;

/// Full Marga configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Terrain cost table
    #[serde(default)]
    pub terrain: TerrainSection,

    /// Pathfinding settings
    #[serde(default)]
    pub pathfinding: PathfindingSection,

    /// Rover settings
    #[serde(default)]
    pub rover: RoverSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/marga.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/marga.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Convert to a validated TerrainCostModel
    pub fn to_cost_model(&self) -> Result<TerrainCostModel, ConfigLoadError> {
        Ok(self.terrain.to_cost_model()?)
    }

    /// Convert to a validated PlannerConfig
    pub fn to_planner_config(&self) -> Result<PlannerConfig, ConfigLoadError> {
        self.pathfinding.to_planner_config()
    }

    /// Build a rover at the configured origin using the configured cost table.
    pub fn to_rover(&self) -> Result<RoverAgent, ConfigLoadError> {
        let rover = &self.rover;
        if !rover.initial_energy.is_finite() || rover.initial_energy < 0.0 {
            return Err(ConfigLoadError::Invalid(format!(
                "rover.initial_energy must be finite and >= 0, got {}",
                rover.initial_energy
            )));
        }
        if !(rover.speed > 0.0 && rover.speed <= 1.0) {
            return Err(ConfigLoadError::Invalid(format!(
                "rover.speed must be in (0, 1], got {}",
                rover.speed
            )));
        }

        Ok(RoverAgent::new(rover.initial_energy)
            .with_origin(rover.origin)
            .with_speed(rover.speed)
            .with_cost_model(self.to_cost_model()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, TerrainGrid, TerrainType};
    use crate::pathfinding::{HeuristicKind, PathPlanner, SearchStrategy};
    use crate::rover::RoverStatus;

    #[test]
    fn test_default_config() {
        let config = MargaConfig::default();
        assert_eq!(config.terrain.sand.cost, 2.0);
        assert_eq!(config.rover.initial_energy, 100.0);
        assert_eq!(config.pathfinding.strategy, SearchStrategy::AStar);
        assert_eq!(config.to_cost_model().unwrap(), TerrainCostModel::default());
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = MargaConfig::from_yaml("{}").unwrap();
        assert_eq!(config.pathfinding.max_iterations, 100_000);
        assert_eq!(config.rover.origin, Cell::new(0, 0));
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = r#"
terrain:
  rock:
    cost: 5.0
    speed: 0.4
pathfinding:
  strategy: energy_efficient
  heuristic: euclidean
  energy_weight: 4.0
rover:
  initial_energy: 50.0
  origin: { row: 2, col: 3 }
"#;
        let config = MargaConfig::from_yaml(yaml).unwrap();

        let costs = config.to_cost_model().unwrap();
        assert_eq!(costs.cost(TerrainType::Rock).value(), Some(5.0));
        assert_eq!(costs.speed_factor(TerrainType::Rock), 0.4);
        assert_eq!(costs.cost(TerrainType::Sand).value(), Some(2.0));

        assert_eq!(config.pathfinding.strategy, SearchStrategy::EnergyEfficient);
        let planner = config.to_planner_config().unwrap();
        assert_eq!(planner.heuristic, HeuristicKind::Euclidean);
        assert_eq!(planner.energy_weight, 4.0);
        assert_eq!(planner.max_iterations, 100_000);

        let rover = config.to_rover().unwrap();
        assert_eq!(rover.energy(), 50.0);
        assert_eq!(rover.position(), Cell::new(2, 3));
        assert_eq!(rover.status(), RoverStatus::Idle);
        assert_eq!(rover.cost_model(), &costs);
    }

    #[test]
    fn test_invalid_terrain_cost_rejected() {
        let config = MargaConfig::from_yaml("terrain:\n  sand:\n    cost: 0.5\n    speed: 0.7\n")
            .unwrap();
        assert!(matches!(
            config.to_cost_model(),
            Err(ConfigLoadError::CostTable(_))
        ));
        assert!(config.to_rover().is_err());
    }

    #[test]
    fn test_invalid_rover_rejected() {
        let config = MargaConfig::from_yaml("rover:\n  speed: 0.0\n").unwrap();
        assert!(matches!(config.to_rover(), Err(ConfigLoadError::Invalid(_))));

        let config = MargaConfig::from_yaml("rover:\n  initial_energy: -5.0\n").unwrap();
        assert!(matches!(config.to_rover(), Err(ConfigLoadError::Invalid(_))));
    }

    #[test]
    fn test_invalid_pathfinding_rejected() {
        for yaml in [
            "pathfinding:\n  energy_weight: -2.0\n",
            "pathfinding:\n  energy_weight: .nan\n",
            "pathfinding:\n  diagonal_cost: -1.0\n",
            "pathfinding:\n  diagonal_cost: 0.5\n",
            "pathfinding:\n  diagonal_cost: .inf\n",
            "pathfinding:\n  max_iterations: 0\n",
        ] {
            let config = MargaConfig::from_yaml(yaml).unwrap();
            assert!(
                matches!(config.to_planner_config(), Err(ConfigLoadError::Invalid(_))),
                "accepted {:?}",
                yaml
            );
        }
    }

    #[test]
    fn test_zero_energy_weight_still_plans() {
        let config = MargaConfig::from_yaml("pathfinding:\n  energy_weight: 0.0\n").unwrap();
        let planner_config = config.to_planner_config().unwrap();

        let grid = TerrainGrid::clear(3, 3);
        let costs = config.to_cost_model().unwrap();
        let result = PathPlanner::new(&grid, &costs, planner_config).compute_path(
            Cell::new(0, 0),
            Cell::new(0, 2),
            SearchStrategy::EnergyEfficient,
        );
        assert!(result.success);
        assert_eq!(result.path.len(), 3);
    }

    #[test]
    fn test_malformed_yaml() {
        assert!(matches!(
            MargaConfig::from_yaml("pathfinding: [1, 2"),
            Err(ConfigLoadError::Parse(_))
        ));
        assert!(matches!(
            MargaConfig::from_yaml("pathfinding:\n  strategy: teleport\n"),
            Err(ConfigLoadError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = MargaConfig::load(Path::new("/nonexistent/marga.yaml"));
        assert!(matches!(result, Err(ConfigLoadError::Io(_))));
    }
}
