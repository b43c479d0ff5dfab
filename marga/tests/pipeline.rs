//! End-to-end: validate a raw path, post-process it, render it and drive it.

use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

use approx::assert_relative_eq;

use marga::collision::{CollisionChecker, CollisionOracle};
use marga::config::MargaConfig;
use marga::core::{Bounds, Point2D, Pose2D};
use marga::executor::{
    ExecutorConfig, ExecutorState, RecordingPublisher, SimulatedClock, VelocityCommand,
    WaypointExecutor,
};
use marga::obstacle::{Circle, ObstacleMap, ObstacleSet, Rect};
use marga::path::Path;
use marga::planner::{FixedPathPlanner, PathPlanner, PlanRequest};
use marga::viz::{PathStyle, SvgSink, VisualizationSink};

const WORKSPACE: &str = r#"
collision:
  inflation_margin: 0.3
workspace:
  boundary:
    - { x: 0.0, y: 0.0, width: 5.0, height: 0.1 }
    - { x: 0.0, y: 4.9, width: 5.0, height: 0.1 }
    - { x: 0.0, y: 0.0, width: 0.1, height: 5.0 }
    - { x: 4.9, y: 0.0, width: 0.1, height: 5.0 }
  rectangles:
    - { x: 1.0, y: 1.0, width: 1.0, height: 2.0 }
  circles:
    - { x: 3.0, y: 3.0, radius: 0.5 }
"#;

fn path(points: &[(f32, f32)]) -> Path {
    points.iter().map(|&(x, y)| Point2D::new(x, y)).collect()
}

fn raw_path() -> Path {
    path(&[
        (4.5, 1.5),
        (4.3, 2.0),
        (4.2, 2.5),
        (4.2, 2.6),
        (4.2, 3.0),
        (4.3, 3.5),
        (4.4, 4.0),
        (4.42, 4.1),
        (4.5, 4.5),
    ])
}

#[test]
fn mission_runs_from_start_to_goal() {
    let config = MargaConfig::from_yaml(WORKSPACE).unwrap();
    let oracle = config.oracle().unwrap();

    let request = PlanRequest::new(
        Point2D::new(4.5, 1.5),
        Point2D::new(4.5, 4.5),
        Bounds::from_size(5.0, 5.0),
    );
    let mut planner = FixedPathPlanner::new(raw_path());
    let planned = planner.plan(&request, &oracle).unwrap();
    assert_eq!(oracle.first_blocked_segment(&planned.path), None);

    let processor = config.post_processor().unwrap();
    let filtered = processor.filter(&planned.path);
    assert_eq!(filtered.len(), 7);

    let waypoints = processor.process(&planned.path);
    assert_eq!(waypoints.first(), Some(Point2D::new(1.5, 0.5)));

    let mut executor = WaypointExecutor::new(
        config.executor_config(),
        config.start_pose(),
        RecordingPublisher::new(),
        SimulatedClock::new(),
    )
    .unwrap();
    let report = executor.execute(&waypoints).unwrap();

    assert_eq!(report.segments.len(), 7);
    // First waypoint is the start position
    assert_eq!(report.segments[0].distance, 0.0);
    assert_relative_eq!(report.final_pose.x, 4.5, epsilon = 1e-5);
    assert_relative_eq!(report.final_pose.y, 0.5, epsilon = 1e-5);
    assert_eq!(executor.state(), ExecutorState::Stopped);
    assert_eq!(executor.publisher().last(), Some(VelocityCommand::stop()));
    assert_eq!(
        executor.publisher().commands().len(),
        report.commands_published
    );

    // Every tick of simulated time came from a motion command
    let moving = executor
        .publisher()
        .commands()
        .iter()
        .filter(|c| !c.is_stop())
        .count();
    assert_eq!(executor.pacer().ticks() as usize, moving);
}

#[test]
fn blocked_segment_is_reported() {
    let config = MargaConfig::from_yaml(WORKSPACE).unwrap();
    let oracle = config.oracle().unwrap();

    // Second segment cuts straight through the circle
    let through_circle = path(&[(4.5, 1.5), (4.0, 2.0), (2.0, 4.0), (1.0, 4.5)]);
    assert_eq!(oracle.first_blocked_segment(&through_circle), Some(1));

    // Inflated box reaches 0.3m past its faces
    let checker: &dyn CollisionChecker = &oracle;
    assert!(checker.is_inside_obstacle(Point2D::new(0.75, 2.0)));
    assert!(!checker.is_inside_obstacle(Point2D::new(0.65, 2.0)));
}

#[test]
fn two_waypoint_execution() {
    let mut executor = WaypointExecutor::new(
        ExecutorConfig::default(),
        Pose2D::new(1.5, 0.5, 0.0),
        RecordingPublisher::new(),
        SimulatedClock::new(),
    )
    .unwrap();

    let report = executor
        .execute(&path(&[(2.5, 0.5), (2.5, 1.5)]))
        .unwrap();

    assert_relative_eq!(report.segments[0].rotation, 0.0);
    assert_relative_eq!(report.segments[1].rotation, FRAC_PI_2);
    assert_relative_eq!(report.segments[0].distance, 1.0);
    assert_relative_eq!(report.segments[1].distance, 1.0);
    assert_relative_eq!(report.final_pose.x, 2.5);
    assert_relative_eq!(report.final_pose.y, 1.5);
    assert_relative_eq!(report.final_pose.theta, FRAC_PI_2);
    assert!(executor.publisher().last().unwrap().is_stop());
}

#[test]
fn obstacle_update_rebuilds_oracle() {
    let map = ObstacleMap::new(ObstacleSet::empty());
    let a = Point2D::new(0.0, 0.0);
    let b = Point2D::new(4.0, 0.0);

    let before = CollisionOracle::new(map.snapshot(), 0.2).unwrap();
    assert!(before.is_collision_free(a, b));

    map.update(vec![], vec![Rect::new(1.5, -0.5, 1.0, 1.0)], vec![])
        .unwrap();
    let after = CollisionOracle::new(map.snapshot(), 0.2).unwrap();
    assert!(!after.is_collision_free(a, b));

    // Oracle built on the old snapshot still answers for the old set
    assert!(before.is_collision_free(a, b));

    // Rejected update keeps the box
    assert!(
        map.update(vec![], vec![], vec![Circle::new(0.0, 0.0, f32::NAN)])
            .is_err()
    );
    assert_eq!(map.snapshot().rectangles().len(), 1);
    assert!(Arc::ptr_eq(after.obstacles(), &map.snapshot()));
}

#[test]
fn svg_render_of_mission() {
    let config = MargaConfig::from_yaml(WORKSPACE).unwrap();
    let processor = config.post_processor().unwrap();
    let raw = raw_path();

    let mut sink = SvgSink::new(Bounds::from_size(5.0, 5.0)).with_fov(1.0, 0.5);
    sink.draw_obstacles(&config.obstacle_set().unwrap());
    sink.draw_path(&raw, PathStyle::Raw);
    sink.draw_path(&processor.filter(&raw), PathStyle::Filtered);
    sink.draw_endpoints(Point2D::new(4.5, 1.5), Point2D::new(4.5, 4.5));

    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("mission.svg");
    sink.save(&file).unwrap();

    let svg = std::fs::read_to_string(&file).unwrap();
    assert!(svg.contains("id=\"obstacles\""));
    assert!(svg.contains("id=\"fov\""));
    // One wedge per filtered segment
    assert_eq!(svg.matches("<polygon").count(), 6);
}
