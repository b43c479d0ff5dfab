//! Ordered waypoint sequence.

use serde::{Deserialize, Serialize};

use crate::core::Point2D;

/// Ordered sequence of 2D points; insertion order is traversal order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    points: Vec<Point2D>,
}

impl Path {
    /// Empty path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Path visiting `points` in order.
    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    /// Waypoints in traversal order.
    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    /// Consume the path, returning its points.
    pub fn into_points(self) -> Vec<Point2D> {
        self.points
    }

    /// Append a waypoint.
    pub fn push(&mut self, point: Point2D) {
        self.points.push(point);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Point2D> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Point2D> {
        self.points.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.points.iter().copied()
    }

    /// Consecutive `(from, to)` pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point2D, Point2D)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }

    /// Sum of segment lengths (meters).
    pub fn length(&self) -> f32 {
        self.segments().map(|(a, b)| a.distance(b)).sum()
    }
}

impl From<Vec<Point2D>> for Path {
    fn from(points: Vec<Point2D>) -> Self {
        Self::from_points(points)
    }
}

impl FromIterator<Point2D> for Path {
    fn from_iter<I: IntoIterator<Item = Point2D>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point2D;
    type IntoIter = std::slice::Iter<'a, Point2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
