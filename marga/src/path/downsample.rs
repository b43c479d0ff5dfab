//! Distance-based waypoint down-sampling.

use crate::config::ConfigError;
use crate::config::error::non_negative;
use crate::core::Point2D;

use super::Path;

/// Drops waypoints that sit closer than `threshold` to the last kept one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Downsampler {
    threshold: f32,
}

impl Downsampler {
    /// Create a down-sampler; the threshold must be finite and non-negative.
    pub fn new(threshold: f32) -> Result<Self, ConfigError> {
        let threshold = non_negative("downsample_threshold", threshold)?;
        Ok(Self { threshold })
    }

    /// Minimum spacing between retained interior points (meters).
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Filter `path`.
    ///
    /// The first point is always kept. Each interior point is kept when its
    /// distance to the most recently kept point is at least the threshold.
    /// The last point is always appended, so only a single-point path comes
    /// back with one element.
    pub fn downsample(&self, path: &Path) -> Path {
        let points = path.points();
        let (first, last) = match points {
            [] => return Path::new(),
            [only] => return Path::from_points(vec![*only]),
            [first, .., last] => (*first, *last),
        };

        let mut kept: Vec<Point2D> = Vec::with_capacity(points.len());
        kept.push(first);

        for &point in &points[1..points.len() - 1] {
            let prev = kept[kept.len() - 1];
            if point.distance(prev) >= self.threshold {
                kept.push(point);
            }
        }

        kept.push(last);
        Path::from_points(kept)
    }
}
