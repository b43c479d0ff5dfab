//! Executor configuration section.

use serde::{Deserialize, Serialize};

use crate::core::Pose2D;
use crate::executor::ExecutorConfig;

use super::defaults;

/// Open-loop execution settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExecutorSection {
    /// Forward speed (m/s)
    #[serde(default = "defaults::linear_speed")]
    pub linear_speed: f32,

    /// Turn rate (rad/s)
    #[serde(default = "defaults::angular_speed")]
    pub angular_speed: f32,

    /// Rotation tick period (seconds)
    #[serde(default = "defaults::rotation_period")]
    pub rotation_period: f32,

    /// Translation tick period (seconds)
    #[serde(default = "defaults::translation_period")]
    pub translation_period: f32,

    /// Initial dead-reckoned pose, execution frame
    #[serde(default = "defaults::start_pose")]
    pub start_pose: Pose2D,
}

impl Default for ExecutorSection {
    fn default() -> Self {
        Self {
            linear_speed: defaults::linear_speed(),
            angular_speed: defaults::angular_speed(),
            rotation_period: defaults::rotation_period(),
            translation_period: defaults::translation_period(),
            start_pose: defaults::start_pose(),
        }
    }
}

impl ExecutorSection {
    /// Convert to ExecutorConfig
    pub fn to_executor_config(&self) -> ExecutorConfig {
        ExecutorConfig {
            linear_speed: self.linear_speed,
            angular_speed: self.angular_speed,
            rotation_period: self.rotation_period,
            translation_period: self.translation_period,
        }
    }
}
