//! Straight-line collision oracle over an inflated obstacle set.

use std::sync::Arc;

use crate::config::ConfigError;
use crate::config::error::non_negative;
use crate::core::Point2D;
use crate::obstacle::{InflatedRect, ObstacleSet, inflate_all};
use crate::path::Path;

use super::ray::{Ray, segment_intersects_circle, segment_intersects_rect_edge};

/// Collision queries a planner issues while growing its tree.
pub trait CollisionChecker {
    /// True when the straight segment `start → end` touches no inflated obstacle.
    fn is_collision_free(&self, start: Point2D, end: Point2D) -> bool;

    /// True when `point` lies inside (or on) an inflated obstacle.
    fn is_inside_obstacle(&self, point: Point2D) -> bool;
}

/// Collision oracle for one obstacle set and inflation margin.
///
/// The oracle is the obstacle context for every query: it owns a snapshot of
/// the set plus the inflated rectangle corners derived from it. Build a new
/// oracle when the obstacles or the margin change.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use marga::collision::CollisionOracle;
/// use marga::core::Point2D;
/// use marga::obstacle::{Circle, ObstacleSet};
///
/// let set = ObstacleSet::new(vec![], vec![], vec![Circle::new(2.0, 0.0, 0.5)]).unwrap();
/// let oracle = CollisionOracle::new(Arc::new(set), 0.5).unwrap();
///
/// assert!(!oracle.is_collision_free(Point2D::new(0.0, 0.0), Point2D::new(4.0, 0.0)));
/// assert!(oracle.is_collision_free(Point2D::new(0.0, 2.0), Point2D::new(4.0, 2.0)));
/// ```
#[derive(Clone, Debug)]
pub struct CollisionOracle {
    obstacles: Arc<ObstacleSet>,
    margin: f32,
    inflated: Vec<InflatedRect>,
}

impl CollisionOracle {
    /// Create an oracle; the margin must be finite and non-negative.
    pub fn new(obstacles: Arc<ObstacleSet>, margin: f32) -> Result<Self, ConfigError> {
        let margin = non_negative("inflation_margin", margin)?;
        let inflated = inflate_all(obstacles.rect_obstacles(), margin);

        log::debug!(
            "CollisionOracle: {} obstacles, margin {:.3}m, {} inflated rectangles",
            obstacles.len(),
            margin,
            inflated.len()
        );

        Ok(Self {
            obstacles,
            margin,
            inflated,
        })
    }

    /// Obstacle set this oracle answers for.
    pub fn obstacles(&self) -> &Arc<ObstacleSet> {
        &self.obstacles
    }

    /// Inflation margin δ.
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// δ-expanded corners of every boundary and rectangle obstacle.
    pub fn inflated_vertices(&self) -> &[InflatedRect] {
        &self.inflated
    }

    /// True if `point` is within δ of a circle or inside a δ-expanded rectangle.
    ///
    /// Both tests are inclusive on the inflated boundary.
    pub fn point_inside_obstacle(&self, point: Point2D) -> bool {
        let delta = self.margin;

        let in_circle = self
            .obstacles
            .circles()
            .iter()
            .any(|c| point.distance(c.center()) <= c.radius + delta);
        if in_circle {
            return true;
        }

        self.obstacles.rect_obstacles().any(|r| {
            let dx = point.x - (r.x - delta);
            let dy = point.y - (r.y - delta);
            (0.0..=r.width + 2.0 * delta).contains(&dx) && (0.0..=r.height + 2.0 * delta).contains(&dy)
        })
    }

    /// True when the segment `start → end` is clear of every inflated obstacle.
    ///
    /// Endpoints inside an obstacle fail immediately. Otherwise the segment
    /// is tested against the four edges of each inflated rectangle and then
    /// every circle; the first hit ends the search.
    pub fn is_collision_free(&self, start: Point2D, end: Point2D) -> bool {
        if self.point_inside_obstacle(start) || self.point_inside_obstacle(end) {
            return false;
        }

        let ray = Ray::from_segment(start, end);

        let hits_rect = self.inflated.iter().any(|rect| {
            rect.edges()
                .iter()
                .any(|&(a, b)| segment_intersects_rect_edge(start, end, &ray, a, b))
        });
        if hits_rect {
            return false;
        }

        !self
            .obstacles
            .circles()
            .iter()
            .any(|c| segment_intersects_circle(&ray, c.center(), c.radius, self.margin))
    }

    /// Index of the first segment of `path` that is not collision-free.
    pub fn first_blocked_segment(&self, path: &Path) -> Option<usize> {
        self.blocked(path).next()
    }

    /// Indices of every segment of `path` that is not collision-free.
    ///
    /// Segment `i` joins `path[i]` and `path[i + 1]`. A single-point path is
    /// checked as a zero-length segment, so a point inside an obstacle
    /// reports index 0.
    pub fn blocked_segments(&self, path: &Path) -> Vec<usize> {
        self.blocked(path).collect()
    }

    fn blocked<'a>(&'a self, path: &'a Path) -> Box<dyn Iterator<Item = usize> + 'a> {
        match path.points() {
            [] => Box::new(std::iter::empty()),
            [only] => Box::new((!self.is_collision_free(*only, *only)).then_some(0).into_iter()),
            points => Box::new(
                points
                    .windows(2)
                    .enumerate()
                    .filter(|(_, w)| !self.is_collision_free(w[0], w[1]))
                    .map(|(i, _)| i),
            ),
        }
    }
}

impl CollisionChecker for CollisionOracle {
    fn is_collision_free(&self, start: Point2D, end: Point2D) -> bool {
        CollisionOracle::is_collision_free(self, start, end)
    }

    fn is_inside_obstacle(&self, point: Point2D) -> bool {
        self.point_inside_obstacle(point)
    }
}
