//! Ray primitives for segment validation.
//!
//! A query segment `start → end` is treated as the ray `o + t·d` with
//! `o = start` and `d = end - start`, so `t ∈ [0, 1]` covers the segment.
//!
//! Degenerate input (parallel edges, zero-length rays) always resolves to
//! "no intersection".

use crate::core::{Node, Point2D};

/// Parametric ray `origin + t * direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Ray origin
    pub origin: Point2D,
    /// Unnormalized direction
    pub direction: Point2D,
}

impl Ray {
    /// Create a ray.
    #[inline]
    pub fn new(origin: Point2D, direction: Point2D) -> Self {
        Self { origin, direction }
    }

    /// Ray covering `start → end` for `t ∈ [0, 1]`.
    #[inline]
    pub fn from_segment(start: Point2D, end: Point2D) -> Self {
        Self::new(start, end - start)
    }

    /// Node at parameter `t`; its parent is the ray origin.
    #[inline]
    pub fn shoot(&self, t: f32) -> Node {
        Node::with_parent(self.origin + self.direction * t, self.origin)
    }
}

/// Test the query segment against one obstacle edge `[edge_a, edge_b]`.
///
/// With `v1 = o - a`, `v2 = b - a`, `v3 = perp(d)` and `div = v2 · v3`:
/// `t1 = (v2 × v1) / div` is the ray parameter of the crossing and
/// `t2 = (v1 · v3) / div` its position along the edge. The crossing counts
/// when `t1 >= 0`, `t2 ∈ [0, 1]` and the shot point is no farther from
/// `start` than `end` is.
///
/// `t1` keeps the sign of the cross product, so crossings behind the ray
/// origin are rejected and either edge orientation gives the same answer.
/// Taking `|v2 × v1|` instead would mirror a crossing behind the origin onto
/// the segment and report it as a hit.
pub fn segment_intersects_rect_edge(
    start: Point2D,
    end: Point2D,
    ray: &Ray,
    edge_a: Point2D,
    edge_b: Point2D,
) -> bool {
    let v1 = ray.origin - edge_a;
    let v2 = edge_b - edge_a;
    let v3 = ray.direction.perpendicular();

    let div = v2.dot(v3);
    if div == 0.0 {
        return false;
    }

    let t1 = v2.cross(v1) / div;
    let t2 = v1.dot(v3) / div;

    if t1 >= 0.0 && (0.0..=1.0).contains(&t2) {
        let shot = ray.shoot(t1);
        return start.distance(shot.point) <= start.distance(end);
    }

    false
}

/// Test the query segment against an inflated circle.
///
/// Projects the center onto the ray; the closest point on the segment must
/// lie within `radius + margin` of the center. Projections falling outside
/// the segment (`t ∉ [0, 1]`) are rejected; endpoints near the circle are
/// covered by the point-inside test.
pub fn segment_intersects_circle(ray: &Ray, center: Point2D, radius: f32, margin: f32) -> bool {
    let d2 = ray.direction.dot(ray.direction);
    if d2 == 0.0 {
        return false;
    }

    let t = (center - ray.origin).dot(ray.direction) / d2;
    if !(0.0..=1.0).contains(&t) {
        return false;
    }

    let shot = ray.shoot(t);
    shot.distance(center) <= radius + margin
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn p(x: f32, y: f32) -> Point2D {
        Point2D::new(x, y)
    }

    #[test]
    fn test_shoot_lies_on_ray() {
        let ray = Ray::from_segment(p(1.0, 1.0), p(3.0, 2.0));
        let node = ray.shoot(0.5);
        assert_eq!(node.point, p(2.0, 1.5));
        assert_eq!(node.parent, Some(p(1.0, 1.0)));
        // Collinear with origin and direction
        assert_relative_eq!((node.point - ray.origin).cross(ray.direction), 0.0);
    }

    #[test]
    fn test_edge_crossing_detected() {
        // Edge from (2,-1) to (2,1), segment along +X crossing it
        let (start, end) = (p(0.0, 0.0), p(4.0, 0.0));
        let ray = Ray::from_segment(start, end);
        assert!(segment_intersects_rect_edge(start, end, &ray, p(2.0, -1.0), p(2.0, 1.0)));
    }

    #[test]
    fn test_edge_orientation_does_not_matter() {
        let (start, end) = (p(0.0, 0.0), p(4.0, 0.0));
        let ray = Ray::from_segment(start, end);
        assert!(segment_intersects_rect_edge(start, end, &ray, p(2.0, 1.0), p(2.0, -1.0)));

        let back = Ray::from_segment(end, start);
        assert!(segment_intersects_rect_edge(end, start, &back, p(2.0, 1.0), p(2.0, -1.0)));
        assert!(segment_intersects_rect_edge(end, start, &back, p(2.0, -1.0), p(2.0, 1.0)));
    }

    #[test]
    fn test_edge_behind_origin() {
        // Moving away from an edge that lies 1m behind the start
        let (start, end) = (p(3.0, 0.0), p(4.0, 0.0));
        let ray = Ray::from_segment(start, end);
        assert!(!segment_intersects_rect_edge(start, end, &ray, p(2.0, -1.0), p(2.0, 1.0)));
        assert!(!segment_intersects_rect_edge(start, end, &ray, p(2.0, 1.0), p(2.0, -1.0)));
    }

    #[test]
    fn test_edge_beyond_segment_end() {
        // Crossing at x=2 lies past the end of a 1m segment
        let (start, end) = (p(0.0, 0.0), p(1.0, 0.0));
        let ray = Ray::from_segment(start, end);
        assert!(!segment_intersects_rect_edge(start, end, &ray, p(2.0, -1.0), p(2.0, 1.0)));
    }

    #[test]
    fn test_edge_missed_along_edge_axis() {
        // Line passes the edge's supporting line outside [a, b]
        let (start, end) = (p(0.0, 5.0), p(4.0, 5.0));
        let ray = Ray::from_segment(start, end);
        assert!(!segment_intersects_rect_edge(start, end, &ray, p(2.0, -1.0), p(2.0, 1.0)));
    }

    #[test]
    fn test_parallel_edge_is_no_intersection() {
        let (start, end) = (p(0.0, 0.0), p(4.0, 0.0));
        let ray = Ray::from_segment(start, end);
        assert!(!segment_intersects_rect_edge(start, end, &ray, p(0.0, 0.0), p(4.0, 0.0)));
        assert!(!segment_intersects_rect_edge(start, end, &ray, p(0.0, 1.0), p(4.0, 1.0)));
    }

    #[test]
    fn test_zero_length_ray_edge() {
        let start = p(1.0, 1.0);
        let ray = Ray::from_segment(start, start);
        assert!(!segment_intersects_rect_edge(start, start, &ray, p(0.0, 0.0), p(0.0, 2.0)));
    }

    #[test]
    fn test_circle_hit_through_center() {
        let ray = Ray::from_segment(p(0.0, 0.0), p(4.0, 0.0));
        assert!(segment_intersects_circle(&ray, p(2.0, 0.0), 0.1, 0.0));
    }

    #[test]
    fn test_circle_hit_from_margin() {
        let ray = Ray::from_segment(p(0.0, 0.0), p(4.0, 0.0));
        // 0.8 off the line: radius 0.5 alone misses, with 0.5 margin it hits
        assert!(!segment_intersects_circle(&ray, p(2.0, 0.8), 0.5, 0.0));
        assert!(segment_intersects_circle(&ray, p(2.0, 0.8), 0.5, 0.5));
    }

    #[test]
    fn test_circle_projection_outside_segment() {
        let ray = Ray::from_segment(p(0.0, 0.0), p(1.0, 0.0));
        assert!(!segment_intersects_circle(&ray, p(3.0, 0.0), 0.5, 0.5));
        assert!(!segment_intersects_circle(&ray, p(-2.0, 0.0), 0.5, 0.5));
    }

    #[test]
    fn test_circle_zero_length_ray() {
        let ray = Ray::from_segment(p(1.0, 1.0), p(1.0, 1.0));
        assert!(!segment_intersects_circle(&ray, p(1.0, 1.0), 1.0, 0.5));
    }
}
