//! Rotate-then-translate plan for one segment.

use crate::core::{Point2D, Pose2D, normalize_angle};

/// Motion needed to reach a goal from a pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentPlan {
    /// Absolute heading toward the goal (radians)
    pub target_heading: f32,
    /// Signed in-place rotation, in (-π, π]
    pub rotation: f32,
    /// Straight-line distance (meters)
    pub distance: f32,
}

impl SegmentPlan {
    /// Plan the motion from `pose` to `goal`.
    ///
    /// A goal at the current position has `atan2(0, 0) = 0` as its heading,
    /// so the robot turns to face +X and drives nowhere.
    pub fn between(pose: Pose2D, goal: Point2D) -> Self {
        let dx = goal.x - pose.x;
        let dy = goal.y - pose.y;

        let target_heading = dy.atan2(dx);
        Self {
            target_heading,
            rotation: normalize_angle(target_heading - pose.theta),
            distance: dx.hypot(dy),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_straight_ahead() {
        let plan = SegmentPlan::between(Pose2D::new(1.5, 0.5, 0.0), Point2D::new(2.5, 0.5));
        assert_eq!(plan.rotation, 0.0);
        assert_relative_eq!(plan.distance, 1.0);
    }

    #[test]
    fn test_left_turn() {
        let plan = SegmentPlan::between(Pose2D::new(2.5, 0.5, 0.0), Point2D::new(2.5, 1.5));
        assert_relative_eq!(plan.target_heading, FRAC_PI_2);
        assert_relative_eq!(plan.rotation, FRAC_PI_2);
    }

    #[test]
    fn test_goal_behind_resolves_to_plus_pi() {
        let plan = SegmentPlan::between(Pose2D::new(1.0, 0.0, 0.0), Point2D::new(0.0, 0.0));
        assert_eq!(plan.rotation, PI);
        assert_relative_eq!(plan.distance, 1.0);
    }

    #[test]
    fn test_rotation_takes_short_way() {
        // Heading 170°, goal at -170° → +20°, not -340°
        let pose = Pose2D::new(0.0, 0.0, 170f32.to_radians());
        let goal = Point2D::ZERO.point_at((-170f32).to_radians(), 1.0);
        let plan = SegmentPlan::between(pose, goal);
        assert_relative_eq!(plan.rotation, 20f32.to_radians(), epsilon = 1e-4);
    }

    #[test]
    fn test_goal_at_current_position_faces_plus_x() {
        let pose = Pose2D::new(2.0, 2.0, 1.0);
        let plan = SegmentPlan::between(pose, Point2D::new(2.0, 2.0));
        assert_eq!(plan.target_heading, 0.0);
        assert_relative_eq!(plan.rotation, -1.0);
        assert_eq!(plan.distance, 0.0);
    }
}
