//! Point types for workspace geometry.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A point (or vector) in the workspace plane, in meters.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    /// X coordinate in meters
    pub x: f32,
    /// Y coordinate in meters
    pub y: f32,
}

impl Point2D {
    /// Create a new point
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: Point2D = Point2D { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(self, other: Point2D) -> f32 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Squared distance (avoids sqrt)
    #[inline]
    pub fn distance_squared(self, other: Point2D) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Angle from this point to another (radians, CCW from +X)
    #[inline]
    pub fn angle_to(self, other: Point2D) -> f32 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Point at `angle` and `distance` from this point
    #[inline]
    pub fn point_at(self, angle: f32, distance: f32) -> Point2D {
        let (sin, cos) = angle.sin_cos();
        Point2D::new(self.x + distance * cos, self.y + distance * sin)
    }

    /// Length of this point as a vector from the origin
    #[inline]
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Point2D) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Cross product (z-component of the 3D cross product)
    #[inline]
    pub fn cross(self, other: Point2D) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Counter-clockwise perpendicular `(-y, x)`
    #[inline]
    pub fn perpendicular(self) -> Point2D {
        Point2D::new(-self.y, self.x)
    }

    /// Check that both coordinates are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2D {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Point2D::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point2D {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Point2D::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f32> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Point2D::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Point2D {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Point2D::new(-self.x, -self.y)
    }
}

impl From<(f32, f32)> for Point2D {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Point2D::new(x, y)
    }
}

/// A point generated along a ray, remembering the origin that produced it.
///
/// Nodes are transient values built while testing a query segment; the parent
/// is a plain copy of the generating point, not a link into any tree. A node
/// produced by [`Ray::shoot`](crate::collision::Ray::shoot) always lies on the
/// ray's supporting line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    /// Position of the node
    pub point: Point2D,
    /// Point this node was generated from, if any
    pub parent: Option<Point2D>,
}

impl Node {
    /// Root node without a parent
    #[inline]
    pub fn new(point: Point2D) -> Self {
        Self {
            point,
            parent: None,
        }
    }

    /// Node generated from `parent`
    #[inline]
    pub fn with_parent(point: Point2D, parent: Point2D) -> Self {
        Self {
            point,
            parent: Some(parent),
        }
    }

    /// Distance from this node to another point
    #[inline]
    pub fn distance(&self, other: Point2D) -> f32 {
        self.point.distance(other)
    }
}

impl From<Point2D> for Node {
    fn from(point: Point2D) -> Self {
        Node::new(point)
    }
}
