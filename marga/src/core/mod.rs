//! Core geometry types:
//! - [`Point2D`] and [`Node`]: workspace points and ray-generated nodes
//! - [`Pose2D`]: dead-reckoned robot pose
//! - [`Bounds`]: axis-aligned workspace bounds
//! - [`math`]: angle normalization and helpers

mod bounds;
pub mod math;
mod point;
mod pose;

pub use bounds::Bounds;
pub use math::{angle_diff, normalize_angle};
pub use point::{Node, Point2D};
pub use pose::Pose2D;
