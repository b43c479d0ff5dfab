//! Path post-processing section.

use serde::{Deserialize, Serialize};

use crate::path::{Downsampler, ExecutionFrame, PathPostProcessor};

use super::defaults;
use super::error::ConfigError;

/// Down-sampling and frame transform settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSection {
    /// Minimum spacing between retained waypoints (meters)
    #[serde(default = "defaults::downsample_threshold")]
    pub downsample_threshold: f32,

    /// Workspace extent K in `(x, y) -> (y, K - x)` (meters)
    #[serde(default = "defaults::workspace_extent")]
    pub workspace_extent: f32,
}

impl Default for PathSection {
    fn default() -> Self {
        Self {
            downsample_threshold: defaults::downsample_threshold(),
            workspace_extent: defaults::workspace_extent(),
        }
    }
}

impl PathSection {
    /// Convert to a PathPostProcessor
    pub fn to_post_processor(&self) -> Result<PathPostProcessor, ConfigError> {
        Ok(PathPostProcessor::new(
            Downsampler::new(self.downsample_threshold)?,
            ExecutionFrame::new(self.workspace_extent)?,
        ))
    }
}
