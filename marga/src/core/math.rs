//! Angle utilities.
//!
//! All angles are in radians, counter-clockwise positive from +X.

use std::f32::consts::{PI, TAU};

use super::Point2D;

/// Normalize angle to (-π, π].
///
/// The wrap point resolves to `+π`: both `π` and `-π` map to `π`.
///
/// # Example
/// ```
/// use marga::core::math::normalize_angle;
/// use std::f32::consts::PI;
///
/// assert_eq!(normalize_angle(-PI), PI);
/// assert!((normalize_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-5);
/// ```
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid may round up to exactly TAU for tiny negative inputs
    if a > PI { a - TAU } else { a }
}

/// Signed shortest rotation from `from` to `to`, in (-π, π].
#[inline]
pub fn angle_diff(from: f32, to: f32) -> f32 {
    normalize_angle(to - from)
}

/// Endpoints of a field-of-view wedge.
///
/// Returns `(left, right)` points at `range` from `position`, at
/// `yaw - fov / 2` and `yaw + fov / 2` respectively.
pub fn fov_points(position: Point2D, yaw: f32, fov: f32, range: f32) -> (Point2D, Point2D) {
    let half = fov / 2.0;
    (
        position.point_at(yaw - half, range),
        position.point_at(yaw + half, range),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_normalize_angle_range() {
        for i in -100..=100 {
            let a = normalize_angle(i as f32 * 0.37);
            assert!(a > -PI && a <= PI, "{} out of range", a);
        }
    }

    #[test]
    fn test_normalize_angle_wrap_point() {
        assert_eq!(normalize_angle(PI), PI);
        assert_eq!(normalize_angle(-PI), PI);
        assert_relative_eq!(normalize_angle(0.0), 0.0);
        assert_relative_eq!(normalize_angle(TAU), 0.0, epsilon = 1e-6);
        assert_relative_eq!(normalize_angle(-FRAC_PI_2), -FRAC_PI_2, epsilon = 1e-6);
        assert_relative_eq!(normalize_angle(3.0 * FRAC_PI_2), -FRAC_PI_2, epsilon = 1e-5);
    }

    #[test]
    fn test_angle_diff() {
        assert_relative_eq!(angle_diff(0.0, FRAC_PI_2), FRAC_PI_2, epsilon = 1e-6);
        assert_relative_eq!(angle_diff(FRAC_PI_2, 0.0), -FRAC_PI_2, epsilon = 1e-6);
        // Crossing the ±π seam takes the short way round
        assert_relative_eq!(angle_diff(-0.9 * PI, 0.9 * PI), -0.2 * PI, epsilon = 1e-5);
    }

    #[test]
    fn test_fov_points() {
        let (left, right) = fov_points(Point2D::ZERO, 0.0, FRAC_PI_2, 2.0);
        assert_relative_eq!(left.x, right.x, epsilon = 1e-6);
        assert_relative_eq!(left.y, -right.y, epsilon = 1e-6);
        assert_relative_eq!(left.length(), 2.0, epsilon = 1e-6);
        assert!(left.y < 0.0);
    }
}
