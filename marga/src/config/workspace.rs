//! Workspace obstacle section.

use serde::{Deserialize, Serialize};

use crate::obstacle::{Circle, ObstacleSet, Rect};

use super::error::ConfigError;

/// Obstacle lists as written in YAML
///
/// ```yaml
/// workspace:
///   boundary:
///     - { x: 0.0, y: 0.0, width: 5.0, height: 0.1 }
///   rectangles:
///     - { x: 1.0, y: 1.0, width: 1.0, height: 2.0 }
///   circles:
///     - { x: 3.0, y: 3.0, radius: 0.5 }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceSection {
    #[serde(default)]
    pub boundary: Vec<Rect>,

    #[serde(default)]
    pub rectangles: Vec<Rect>,

    #[serde(default)]
    pub circles: Vec<Circle>,
}

impl WorkspaceSection {
    /// Convert to a validated ObstacleSet
    pub fn to_obstacle_set(&self) -> Result<ObstacleSet, ConfigError> {
        ObstacleSet::new(
            self.boundary.clone(),
            self.rectangles.clone(),
            self.circles.clone(),
        )
    }
}
