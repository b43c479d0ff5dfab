//! Default value functions for serde deserialization.

use crate::core::Pose2D;

pub fn inflation_margin() -> f32 {
    0.5
}

pub fn downsample_threshold() -> f32 {
    0.2
}

pub fn workspace_extent() -> f32 {
    5.0
}

pub fn linear_speed() -> f32 {
    0.1
}

pub fn angular_speed() -> f32 {
    0.1
}

pub fn rotation_period() -> f32 {
    0.02
}

pub fn translation_period() -> f32 {
    0.04
}

pub fn start_pose() -> Pose2D {
    Pose2D::new(1.5, 0.5, 0.0)
}
