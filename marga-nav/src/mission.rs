//! Plan, validate, post-process, render and execute one mission.

use marga::collision::CollisionOracle;
use marga::executor::{CommandPublisher, ExecutionReport, Pacer, WaypointExecutor};
use marga::path::PathPostProcessor;
use marga::planner::{FixedPathPlanner, PathPlanner, PlanRequest};
use marga::viz::{PathStyle, VisualizationSink};
use tracing::{debug, info, warn};

use crate::config::MissionConfig;
use crate::error::{NavError, Result};

/// Outcome of a mission run
#[derive(Debug)]
pub struct MissionReport {
    /// Indices of raw-path segments that failed collision validation
    pub blocked_segments: Vec<usize>,
    /// Number of waypoints sent to the executor
    pub waypoints: usize,
    pub execution: ExecutionReport,
}

/// One configured mission
pub struct Mission {
    config: MissionConfig,
    oracle: CollisionOracle,
    processor: PathPostProcessor,
}

impl Mission {
    /// Build the oracle and post-processor from the configuration
    pub fn new(config: MissionConfig) -> Result<Self> {
        let oracle = config.marga.oracle()?;
        let processor = config.marga.post_processor()?;

        info!(
            "Workspace: {} obstacles, inflation margin {:.2}m",
            oracle.obstacles().len(),
            oracle.margin()
        );

        Ok(Self {
            config,
            oracle,
            processor,
        })
    }

    /// Run the whole pipeline.
    ///
    /// Blocked segments are logged and reported but do not stop execution;
    /// the executor has no way to avoid them anyway.
    pub fn run<P: CommandPublisher, C: Pacer>(
        &self,
        publisher: P,
        pacer: C,
        sink: &mut dyn VisualizationSink,
    ) -> Result<MissionReport> {
        let mission = &self.config.mission;
        let request = PlanRequest::new(mission.start, mission.goal, mission.bounds());

        let mut planner = FixedPathPlanner::new(mission.raw_path.clone());
        let planned = planner.plan(&request, &self.oracle).ok_or(NavError::NoPath)?;
        info!("Planner returned {} points", planned.path.len());

        let blocked_segments = self.oracle.blocked_segments(&planned.path);
        for &i in &blocked_segments {
            let points = planned.path.points();
            let (a, b) = (points[i], points.get(i + 1).copied().unwrap_or(points[i]));
            warn!(
                "Segment {} ({:.2}, {:.2}) -> ({:.2}, {:.2}) is not collision-free",
                i, a.x, a.y, b.x, b.y
            );
        }

        let filtered = self.processor.filter(&planned.path);
        let waypoints = self.processor.frame.transform_path(&filtered);
        debug!("Execution waypoints: {:?}", waypoints.points());

        sink.draw_obstacles(self.oracle.obstacles());
        sink.draw_tree(&planned.tree);
        sink.draw_path(&planned.path, PathStyle::Raw);
        sink.draw_path(&filtered, PathStyle::Filtered);
        sink.draw_endpoints(mission.start, mission.goal);

        let mut executor = WaypointExecutor::new(
            self.config.marga.executor_config(),
            self.config.marga.start_pose(),
            publisher,
            pacer,
        )?;
        let execution = executor.execute(&waypoints)?;

        Ok(MissionReport {
            blocked_segments,
            waypoints: waypoints.len(),
            execution,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use marga::core::Point2D;
    use marga::executor::{RecordingPublisher, SimulatedClock};
    use marga::path::Path;
    use marga::viz::NullSink;

    fn sample() -> MissionConfig {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../configs/config.yaml");
        MissionConfig::load(&path).unwrap()
    }

    #[test]
    fn test_sample_mission() {
        let mission = Mission::new(sample()).unwrap();
        let mut publisher = RecordingPublisher::new();
        let mut clock = SimulatedClock::new();

        let report = mission.run(&mut publisher, &mut clock, &mut NullSink).unwrap();

        assert!(report.blocked_segments.is_empty());
        assert_eq!(report.waypoints, 7);
        assert_eq!(report.execution.segments.len(), 7);
        assert_relative_eq!(report.execution.final_pose.x, 4.5, epsilon = 1e-5);
        assert_relative_eq!(report.execution.final_pose.y, 0.5, epsilon = 1e-5);
        assert!(publisher.last().unwrap().is_stop());
        assert!(clock.ticks() > 0);
    }

    #[test]
    fn test_blocked_segments_reported() {
        let mut config = sample();
        // Straight through the circle at (3, 3)
        config.mission.raw_path = Path::from_points(vec![
            Point2D::new(4.5, 1.5),
            Point2D::new(4.0, 2.0),
            Point2D::new(2.0, 4.0),
        ]);
        let mission = Mission::new(config).unwrap();

        let report = mission
            .run(RecordingPublisher::new(), SimulatedClock::new(), &mut NullSink)
            .unwrap();
        assert_eq!(report.blocked_segments, vec![1]);
        assert_eq!(report.execution.segments.len(), 3);
    }

    #[test]
    fn test_empty_raw_path_is_no_path() {
        let mut config = sample();
        config.mission.raw_path = Path::new();
        let mission = Mission::new(config).unwrap();

        let result = mission.run(RecordingPublisher::new(), SimulatedClock::new(), &mut NullSink);
        assert!(matches!(result, Err(NavError::NoPath)));
    }
}
