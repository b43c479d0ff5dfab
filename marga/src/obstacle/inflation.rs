//! Inflated rectangle corners.

use crate::core::Point2D;

use super::model::Rect;

/// Rectangle corners pushed outward by the inflation margin.
///
/// Corners are stored counter-clockwise starting at the lower-left:
/// `(ox-δ, oy-δ)`, `(ox+w+δ, oy-δ)`, `(ox+w+δ, oy+h+δ)`, `(ox-δ, oy+h+δ)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InflatedRect {
    /// The four corners in CCW order
    pub vertices: [Point2D; 4],
}

impl InflatedRect {
    /// Inflate `rect` by `margin` on every side.
    pub fn new(rect: &Rect, margin: f32) -> Self {
        let x0 = rect.x - margin;
        let y0 = rect.y - margin;
        let x1 = rect.x + rect.width + margin;
        let y1 = rect.y + rect.height + margin;

        Self {
            vertices: [
                Point2D::new(x0, y0),
                Point2D::new(x1, y0),
                Point2D::new(x1, y1),
                Point2D::new(x0, y1),
            ],
        }
    }

    /// Closed edge loop: v1→v2, v2→v3, v3→v4, v4→v1.
    pub fn edges(&self) -> [(Point2D, Point2D); 4] {
        let [v1, v2, v3, v4] = self.vertices;
        [(v1, v2), (v2, v3), (v3, v4), (v4, v1)]
    }
}

/// Inflated corner sets for every rectangle-shaped obstacle.
pub fn inflate_all<'a>(rects: impl IntoIterator<Item = &'a Rect>, margin: f32) -> Vec<InflatedRect> {
    rects
        .into_iter()
        .map(|rect| InflatedRect::new(rect, margin))
        .collect()
}
