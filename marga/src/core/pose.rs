//! Dead-reckoned robot pose.

use serde::{Deserialize, Serialize};

use super::math::normalize_angle;
use super::point::Point2D;

/// A 2D pose: position in meters and heading in radians.
///
/// Heading is counter-clockwise from +X and kept in (-π, π]. In this crate
/// the pose is never read back from a sensor; the executor overwrites it
/// after every commanded motion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters.
    pub x: f32,
    /// Y position in meters.
    pub y: f32,
    /// Heading angle in radians (-π, π], CCW positive from X-axis.
    #[serde(default)]
    pub theta: f32,
}

impl Pose2D {
    /// Create a new pose (theta is normalized).
    #[inline]
    pub fn new(x: f32, y: f32, theta: f32) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// Create an identity pose (origin, facing +X).
    #[inline]
    pub const fn identity() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            theta: 0.0,
        }
    }

    /// Create a pose from position and heading.
    #[inline]
    pub fn from_position(position: Point2D, theta: f32) -> Self {
        Self::new(position.x, position.y, theta)
    }

    /// Position as a Point2D.
    #[inline]
    pub fn position(self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    /// Forward direction (unit vector).
    #[inline]
    pub fn forward(self) -> Point2D {
        let (sin, cos) = self.theta.sin_cos();
        Point2D::new(cos, sin)
    }
}
