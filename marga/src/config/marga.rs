//! Main MargaConfig and conversion methods.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::collision::CollisionOracle;
use crate::core::Pose2D;
use crate::executor::ExecutorConfig;
use crate::obstacle::ObstacleSet;
use crate::path::PathPostProcessor;

use super::collision::CollisionSection;
use super::error::{ConfigError, ConfigLoadError, non_negative};
use super::executor::ExecutorSection;
use super::path::PathSection;
use super::workspace::WorkspaceSection;

/// Full Marga configuration loaded from YAML
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MargaConfig {
    /// Collision checking
    #[serde(default)]
    pub collision: CollisionSection,

    /// Path post-processing
    #[serde(default)]
    pub path: PathSection,

    /// Waypoint executor
    #[serde(default)]
    pub executor: ExecutorSection,

    /// Obstacles
    #[serde(default)]
    pub workspace: WorkspaceSection,
}

impl MargaConfig {
    /// Load and validate a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse and validate a YAML string
    ///
    /// A document with no content yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigLoadError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check every section; the first invalid field is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        non_negative("collision.inflation_margin", self.collision.inflation_margin)?;
        self.path.to_post_processor()?;
        self.executor.to_executor_config().validate()?;
        self.workspace.to_obstacle_set()?;
        Ok(())
    }

    /// Validated obstacle set
    pub fn obstacle_set(&self) -> Result<ObstacleSet, ConfigError> {
        self.workspace.to_obstacle_set()
    }

    /// Collision oracle over the configured workspace
    pub fn oracle(&self) -> Result<CollisionOracle, ConfigError> {
        CollisionOracle::new(Arc::new(self.obstacle_set()?), self.collision.inflation_margin)
    }

    pub fn post_processor(&self) -> Result<PathPostProcessor, ConfigError> {
        self.path.to_post_processor()
    }

    pub fn executor_config(&self) -> ExecutorConfig {
        self.executor.to_executor_config()
    }

    pub fn start_pose(&self) -> Pose2D {
        self.executor.start_pose
    }
}
