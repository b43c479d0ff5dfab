//! Open-loop waypoint executor.

use std::time::Duration;

use log::{debug, info, trace};
use thiserror::Error;

use crate::config::ConfigError;
use crate::config::error::positive;
use crate::core::{Point2D, Pose2D};
use crate::path::Path;

use super::command::{CommandPublisher, PublishError, VelocityCommand};
use super::motion::SegmentPlan;
use super::pacing::Pacer;
use super::state::ExecutorState;

/// Executor failure. Nothing is retried.
#[derive(Error, Debug)]
pub enum ExecutorError {
    #[error("failed to publish velocity command: {0}")]
    Publish(#[from] PublishError),
}

/// Speeds and control periods for open-loop execution.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExecutorConfig {
    /// Forward speed while translating (m/s). Default: 0.1
    pub linear_speed: f32,
    /// Turn rate while rotating (rad/s). Default: 0.1
    pub angular_speed: f32,
    /// Period of one rotation tick (s). Default: 0.02
    pub rotation_period: f32,
    /// Period of one translation tick (s). Default: 0.04
    pub translation_period: f32,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            linear_speed: 0.1,
            angular_speed: 0.1,
            rotation_period: 0.02,
            translation_period: 0.04,
        }
    }
}

impl ExecutorConfig {
    /// Every speed and period must be finite and strictly positive, and
    /// each period must fit in a [`Duration`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("executor.linear_speed", self.linear_speed)?;
        positive("executor.angular_speed", self.angular_speed)?;
        period("executor.rotation_period", self.rotation_period)?;
        period("executor.translation_period", self.translation_period)?;
        Ok(())
    }
}

/// Positive tick period that fits in a [`Duration`].
fn period(field: &str, secs: f32) -> Result<Duration, ConfigError> {
    positive(field, secs)?;
    Duration::try_from_secs_f32(secs).map_err(|_| ConfigError::OutOfRange {
        field: field.to_string(),
        value: secs,
    })
}

/// Outcome of one `go_to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SegmentReport {
    pub goal: Point2D,
    /// Signed rotation performed (radians)
    pub rotation: f32,
    /// Distance driven (meters)
    pub distance: f32,
    /// Rotation commands published before the stop
    pub rotation_ticks: usize,
    /// Translation commands published before the stop
    pub translation_ticks: usize,
}

/// Outcome of a whole path.
#[derive(Clone, Debug, PartialEq)]
pub struct ExecutionReport {
    pub segments: Vec<SegmentReport>,
    /// Dead-reckoned pose after the last waypoint
    pub final_pose: Pose2D,
    /// Every command sent, stops included
    pub commands_published: usize,
}

/// Drives a path by turning in place, then driving straight, per waypoint.
///
/// There is no feedback: the pose snaps to each goal after its motion
/// finishes. All timing goes through the [`Pacer`], which is the only place
/// the executor blocks.
///
/// # Example
/// ```
/// use marga::core::{Point2D, Pose2D};
/// use marga::executor::{ExecutorConfig, RecordingPublisher, SimulatedClock, WaypointExecutor};
/// use marga::path::Path;
///
/// let mut executor = WaypointExecutor::new(
///     ExecutorConfig::default(),
///     Pose2D::new(1.5, 0.5, 0.0),
///     RecordingPublisher::new(),
///     SimulatedClock::new(),
/// )
/// .unwrap();
///
/// let report = executor
///     .execute(&Path::from_points(vec![Point2D::new(2.5, 0.5)]))
///     .unwrap();
/// assert_eq!(report.final_pose.position(), Point2D::new(2.5, 0.5));
/// assert!(executor.publisher().last().unwrap().is_stop());
/// ```
#[derive(Debug)]
pub struct WaypointExecutor<P, C> {
    config: ExecutorConfig,
    rotation_period: Duration,
    translation_period: Duration,
    pose: Pose2D,
    state: ExecutorState,
    publisher: P,
    pacer: C,
    published: usize,
}

impl<P: CommandPublisher, C: Pacer> WaypointExecutor<P, C> {
    /// Create an executor starting at `start_pose`.
    pub fn new(
        config: ExecutorConfig,
        start_pose: Pose2D,
        publisher: P,
        pacer: C,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            rotation_period: period("executor.rotation_period", config.rotation_period)?,
            translation_period: period("executor.translation_period", config.translation_period)?,
            config,
            pose: start_pose,
            state: ExecutorState::Idle,
            publisher,
            pacer,
            published: 0,
        })
    }

    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Dead-reckoned pose.
    pub fn pose(&self) -> Pose2D {
        self.pose
    }

    pub fn state(&self) -> ExecutorState {
        self.state
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn pacer(&self) -> &C {
        &self.pacer
    }

    /// Commands published since construction.
    pub fn commands_published(&self) -> usize {
        self.published
    }

    /// Release the publisher and pacer.
    pub fn into_parts(self) -> (P, C) {
        (self.publisher, self.pacer)
    }

    /// Rotate toward `goal`, drive to it, then snap the pose onto it.
    pub fn go_to(&mut self, goal: Point2D) -> Result<SegmentReport, ExecutorError> {
        let plan = SegmentPlan::between(self.pose, goal);
        debug!(
            "Goal ({:.2}, {:.2}): heading {:.3} rad, rotate {:.3} rad, drive {:.3}m",
            goal.x, goal.y, plan.target_heading, plan.rotation, plan.distance
        );

        self.state = ExecutorState::Rotating {
            target_heading: plan.target_heading,
            rotation: plan.rotation,
        };
        let rotation_ticks = self.rotate(plan.rotation)?;

        self.state = ExecutorState::Translating {
            distance: plan.distance,
        };
        let translation_ticks = self.translate(plan.distance)?;

        self.pose = Pose2D::from_position(goal, plan.target_heading);
        self.state = ExecutorState::Idle;

        Ok(SegmentReport {
            goal,
            rotation: plan.rotation,
            distance: plan.distance,
            rotation_ticks,
            translation_ticks,
        })
    }

    /// Visit every waypoint in order, then publish a final stop.
    ///
    /// An empty path publishes only the stop.
    pub fn execute(&mut self, path: &Path) -> Result<ExecutionReport, ExecutorError> {
        info!(
            "Executing {} waypoints from ({:.2}, {:.2}, {:.2})",
            path.len(),
            self.pose.x,
            self.pose.y,
            self.pose.theta
        );
        let published_before = self.published;

        let mut segments = Vec::with_capacity(path.len());
        for goal in path.iter() {
            segments.push(self.go_to(goal)?);
        }

        self.publish(VelocityCommand::stop())?;
        self.state = ExecutorState::Stopped;

        let commands_published = self.published - published_before;
        info!(
            "Execution finished at ({:.2}, {:.2}, {:.2}) after {} commands",
            self.pose.x, self.pose.y, self.pose.theta, commands_published
        );

        Ok(ExecutionReport {
            segments,
            final_pose: self.pose,
            commands_published,
        })
    }

    fn rotate(&mut self, rotation: f32) -> Result<usize, ExecutorError> {
        let speed = self.config.angular_speed;
        let command = VelocityCommand::rotate(if rotation > 0.0 { speed } else { -speed });
        let step = speed * self.config.rotation_period;

        let mut rotated = 0.0_f32;
        let mut ticks = 0;
        while rotated.abs() < rotation.abs() {
            self.publish(command)?;
            self.pacer.wait(self.rotation_period);
            rotated += step;
            ticks += 1;
            trace!("Rotated: {:.2} / {:.2}", rotated, rotation);
        }

        self.publish(VelocityCommand::stop())?;
        Ok(ticks)
    }

    fn translate(&mut self, distance: f32) -> Result<usize, ExecutorError> {
        let command = VelocityCommand::forward(self.config.linear_speed);
        let step = self.config.linear_speed * self.config.translation_period;

        let mut moved = 0.0_f32;
        let mut ticks = 0;
        while moved < distance {
            self.publish(command)?;
            self.pacer.wait(self.translation_period);
            moved += step;
            ticks += 1;
            trace!("Moved: {:.2} / {:.2}", moved, distance);
        }

        self.publish(VelocityCommand::stop())?;
        Ok(ticks)
    }

    fn publish(&mut self, command: VelocityCommand) -> Result<(), ExecutorError> {
        self.publisher.publish(command)?;
        self.published += 1;
        Ok(())
    }
}
