//! Obstacle primitives and the validated obstacle set.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::config::error::{finite, non_negative};
use crate::core::Point2D;

/// Axis-aligned rectangle: origin is the lower-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Origin X (meters)
    pub x: f32,
    /// Origin Y (meters)
    pub y: f32,
    /// Extent along +X (meters)
    pub width: f32,
    /// Extent along +Y (meters)
    pub height: f32,
}

impl Rect {
    /// Create a rectangle. Dimensions are checked when the set is built.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Lower-left corner.
    #[inline]
    pub fn origin(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    fn validate(&self, label: &str) -> Result<(), ConfigError> {
        finite(format!("{label}.x"), self.x)?;
        finite(format!("{label}.y"), self.y)?;
        non_negative(format!("{label}.width"), self.width)?;
        non_negative(format!("{label}.height"), self.height)?;
        Ok(())
    }
}

/// Circle obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    /// Center X (meters)
    pub x: f32,
    /// Center Y (meters)
    pub y: f32,
    /// Radius (meters)
    pub radius: f32,
}

impl Circle {
    /// Create a circle. The radius is checked when the set is built.
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    fn validate(&self, label: &str) -> Result<(), ConfigError> {
        finite(format!("{label}.x"), self.x)?;
        finite(format!("{label}.y"), self.y)?;
        non_negative(format!("{label}.radius"), self.radius)?;
        Ok(())
    }
}

/// A single obstacle.
///
/// `Boundary` is the workspace perimeter. It is rendered differently but is a
/// plain rectangle for every collision query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Obstacle {
    /// Workspace perimeter wall
    Boundary(Rect),
    /// Rectangular obstacle
    Rectangle(Rect),
    /// Circular obstacle
    Circle(Circle),
}

impl Obstacle {
    /// Rectangle geometry for `Boundary` and `Rectangle`, `None` for circles.
    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Obstacle::Boundary(rect) | Obstacle::Rectangle(rect) => Some(rect),
            Obstacle::Circle(_) => None,
        }
    }

    /// Variant name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Obstacle::Boundary(_) => "boundary",
            Obstacle::Rectangle(_) => "rectangle",
            Obstacle::Circle(_) => "circle",
        }
    }
}

/// Complete, validated obstacle collection.
///
/// The three lists are only ever built and replaced together; see
/// [`ObstacleMap`](super::ObstacleMap) for shared access.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObstacleSet {
    boundaries: Vec<Rect>,
    rectangles: Vec<Rect>,
    circles: Vec<Circle>,
}

impl ObstacleSet {
    /// Build a set, rejecting negative or non-finite geometry.
    ///
    /// # Example
    /// ```
    /// use marga::obstacle::{Circle, ObstacleSet, Rect};
    ///
    /// let set = ObstacleSet::new(
    ///     vec![Rect::new(0.0, 0.0, 5.0, 0.1)],
    ///     vec![Rect::new(1.0, 1.0, 1.0, 2.0)],
    ///     vec![Circle::new(3.0, 3.0, 0.5)],
    /// )
    /// .unwrap();
    /// assert_eq!(set.len(), 3);
    ///
    /// assert!(ObstacleSet::new(vec![], vec![], vec![Circle::new(0.0, 0.0, -1.0)]).is_err());
    /// ```
    pub fn new(
        boundaries: Vec<Rect>,
        rectangles: Vec<Rect>,
        circles: Vec<Circle>,
    ) -> Result<Self, ConfigError> {
        for (i, rect) in boundaries.iter().enumerate() {
            rect.validate(&format!("boundary[{i}]"))?;
        }
        for (i, rect) in rectangles.iter().enumerate() {
            rect.validate(&format!("rectangles[{i}]"))?;
        }
        for (i, circle) in circles.iter().enumerate() {
            circle.validate(&format!("circles[{i}]"))?;
        }

        Ok(Self {
            boundaries,
            rectangles,
            circles,
        })
    }

    /// Set with no obstacles.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Workspace perimeter rectangles.
    pub fn boundaries(&self) -> &[Rect] {
        &self.boundaries
    }

    /// Interior rectangular obstacles.
    pub fn rectangles(&self) -> &[Rect] {
        &self.rectangles
    }

    /// Circular obstacles.
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    /// Every rectangle-shaped obstacle (boundaries first, then rectangles).
    pub fn rect_obstacles(&self) -> impl Iterator<Item = &Rect> {
        self.boundaries.iter().chain(self.rectangles.iter())
    }

    /// Every obstacle as a tagged value.
    pub fn iter(&self) -> impl Iterator<Item = Obstacle> + '_ {
        self.boundaries
            .iter()
            .map(|r| Obstacle::Boundary(*r))
            .chain(self.rectangles.iter().map(|r| Obstacle::Rectangle(*r)))
            .chain(self.circles.iter().map(|c| Obstacle::Circle(*c)))
    }

    /// Total number of obstacles.
    pub fn len(&self) -> usize {
        self.boundaries.len() + self.rectangles.len() + self.circles.len()
    }

    /// True when the set holds no obstacles.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ObstacleSet {
        ObstacleSet::new(
            vec![Rect::new(0.0, 0.0, 5.0, 0.1)],
            vec![Rect::new(1.0, 1.0, 1.0, 2.0), Rect::new(3.0, 0.5, 0.5, 0.5)],
            vec![Circle::new(3.0, 3.0, 0.5)],
        )
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let set = sample();
        assert_eq!(set.boundaries().len(), 1);
        assert_eq!(set.rectangles().len(), 2);
        assert_eq!(set.circles().len(), 1);
        assert_eq!(set.rect_obstacles().count(), 3);
        assert_eq!(set.len(), 4);
        assert!(!set.is_empty());
        assert!(ObstacleSet::empty().is_empty());
    }

    #[test]
    fn test_iter_tags_variants() {
        let kinds: Vec<&str> = sample().iter().map(|o| o.kind()).collect();
        assert_eq!(kinds, ["boundary", "rectangle", "rectangle", "circle"]);
        assert!(Obstacle::Circle(Circle::new(0.0, 0.0, 1.0)).as_rect().is_none());
    }

    #[test]
    fn test_zero_size_is_valid() {
        let set = ObstacleSet::new(vec![], vec![Rect::new(1.0, 1.0, 0.0, 0.0)], vec![]);
        assert!(set.is_ok());
    }

    #[test]
    fn test_rejects_negative_dimensions() {
        let err = ObstacleSet::new(vec![], vec![Rect::new(1.0, 1.0, 1.0, -0.5)], vec![])
            .unwrap_err();
        assert_eq!(err.field(), "rectangles[0].height");

        let err = ObstacleSet::new(vec![Rect::new(0.0, 0.0, -1.0, 1.0)], vec![], vec![])
            .unwrap_err();
        assert_eq!(err.field(), "boundary[0].width");
    }

    #[test]
    fn test_rejects_non_finite() {
        let err =
            ObstacleSet::new(vec![], vec![], vec![Circle::new(f32::NAN, 0.0, 1.0)]).unwrap_err();
        assert!(matches!(err, ConfigError::NotFinite { .. }));
    }

    #[test]
    fn test_yaml_shapes() {
        let rect: Rect = serde_yaml::from_str("{ x: 1.0, y: 2.0, width: 3.0, height: 4.0 }").unwrap();
        assert_eq!(rect, Rect::new(1.0, 2.0, 3.0, 4.0));
        let circle: Circle = serde_yaml::from_str("{ x: 1.0, y: 2.0, radius: 0.5 }").unwrap();
        assert_eq!(circle.center(), Point2D::new(1.0, 2.0));
    }
}
