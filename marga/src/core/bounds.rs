//! Axis-aligned workspace bounds.
//!
//! [`Bounds`] describes the rectangular region the planner samples from and
//! the visualization frames.
//!
//! ```rust
//! use marga::core::{Bounds, Point2D};
//!
//! let bounds = Bounds::from_size(5.0, 5.0);
//! assert_eq!(bounds.width(), 5.0);
//! assert!(bounds.contains(Point2D::new(4.5, 1.5)));
//! ```

use serde::{Deserialize, Serialize};

use super::point::Point2D;

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum corner (smallest x and y values).
    pub min: Point2D,
    /// Maximum corner (largest x and y values).
    pub max: Point2D,
}

impl Bounds {
    /// Create a new bounding box from min and max corners.
    #[inline]
    pub const fn new(min: Point2D, max: Point2D) -> Self {
        Self { min, max }
    }

    /// Bounds spanning `(0, 0)` to `(width, height)`.
    #[inline]
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self {
            min: Point2D::new(0.0, 0.0),
            max: Point2D::new(width, height),
        }
    }

    /// Width of the bounding box (x extent).
    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the bounding box (y extent).
    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check if a point is inside the bounding box (edges inclusive).
    #[inline]
    pub fn contains(&self, point: Point2D) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Expand bounds by a margin on all sides.
    #[inline]
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            min: Point2D::new(self.min.x - margin, self.min.y - margin),
            max: Point2D::new(self.max.x + margin, self.max.y + margin),
        }
    }

    /// Corners in CCW order: min, (max.x, min.y), max, (min.x, max.y).
    #[inline]
    pub fn corners(&self) -> [Point2D; 4] {
        [
            self.min,
            Point2D::new(self.max.x, self.min.y),
            self.max,
            Point2D::new(self.min.x, self.max.y),
        ]
    }
}
