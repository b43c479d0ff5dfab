//! Planning frame to execution frame mapping.

use crate::config::ConfigError;
use crate::config::error::finite;
use crate::core::Point2D;

use super::Path;

/// Fixed coordinate swap between the planner and the command side.
///
/// `to_execution(x, y) = (y, K - x)`, where `K` is the workspace extent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExecutionFrame {
    extent: f32,
}

impl ExecutionFrame {
    /// Create a frame for workspace extent `K` (meters).
    pub fn new(extent: f32) -> Result<Self, ConfigError> {
        let extent = finite("workspace_extent", extent)?;
        Ok(Self { extent })
    }

    /// Workspace extent `K`.
    pub fn extent(&self) -> f32 {
        self.extent
    }

    #[inline]
    pub fn to_execution(&self, p: Point2D) -> Point2D {
        Point2D::new(p.y, self.extent - p.x)
    }

    #[inline]
    pub fn to_planning(&self, q: Point2D) -> Point2D {
        Point2D::new(self.extent - q.y, q.x)
    }

    /// Map every waypoint of a planning-frame path.
    pub fn transform_path(&self, path: &Path) -> Path {
        path.iter().map(|p| self.to_execution(p)).collect()
    }
}
