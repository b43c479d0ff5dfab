//! Mission configuration for MargaNav

use std::path::{Path, PathBuf};

use marga::config::{ConfigLoadError, MargaConfig};
use marga::core::{Bounds, Point2D};
use marga::path::Path as Waypoints;
use serde::{Deserialize, Serialize};

/// Library settings plus the mission and output sections
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MissionConfig {
    #[serde(flatten)]
    pub marga: MargaConfig,

    #[serde(default)]
    pub mission: MissionSection,

    #[serde(default)]
    pub output: OutputSection,
}

/// What to plan, in the planning frame
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MissionSection {
    /// Planner start (default: 4.5, 1.5)
    #[serde(default = "default_start")]
    pub start: Point2D,

    /// Planner goal (default: 4.5, 4.5)
    #[serde(default = "default_goal")]
    pub goal: Point2D,

    /// Workspace size in meters (default: 5 x 5)
    #[serde(default)]
    pub map_size: MapSize,

    /// Pre-recorded planner output replayed by the fixed planner
    #[serde(default)]
    pub raw_path: Waypoints,
}

/// Workspace extent
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct MapSize {
    pub width: f32,
    pub height: f32,
}

/// Rendering output
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OutputSection {
    /// Where to write the SVG rendering; nothing is rendered when unset
    #[serde(default)]
    pub svg: Option<PathBuf>,

    /// Draw the camera field of view along the filtered path
    #[serde(default)]
    pub show_fov: bool,

    /// Field-of-view width in degrees (default: 70)
    #[serde(default = "default_fov_angle_deg")]
    pub fov_angle_deg: f32,

    /// Field-of-view depth in meters (default: 3.0)
    #[serde(default = "default_fov_range")]
    pub fov_range: f32,
}

fn default_start() -> Point2D {
    Point2D::new(4.5, 1.5)
}

fn default_goal() -> Point2D {
    Point2D::new(4.5, 4.5)
}

fn default_fov_angle_deg() -> f32 {
    70.0
}

fn default_fov_range() -> f32 {
    3.0
}

impl Default for MissionSection {
    fn default() -> Self {
        Self {
            start: default_start(),
            goal: default_goal(),
            map_size: MapSize::default(),
            raw_path: Waypoints::new(),
        }
    }
}

impl Default for MapSize {
    fn default() -> Self {
        Self {
            width: 5.0,
            height: 5.0,
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            svg: None,
            show_fov: false,
            fov_angle_deg: default_fov_angle_deg(),
            fov_range: default_fov_range(),
        }
    }
}

impl MissionSection {
    /// Planner sampling bounds
    pub fn bounds(&self) -> Bounds {
        Bounds::from_size(self.map_size.width, self.map_size.height)
    }
}

impl MissionConfig {
    /// Load and validate a mission file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse and validate a mission YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.marga.validate()?;
        Ok(config)
    }
}
