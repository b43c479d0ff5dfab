//! Open-loop waypoint execution.
//!
//! [`WaypointExecutor`] turns a list of execution-frame waypoints into timed
//! velocity commands:
//!
//! ```text
//! Idle ──▶ Rotating ──▶ Translating ──▶ Idle ── … ──▶ Stopped
//! ```
//!
//! Commands leave through a [`CommandPublisher`]; every control period is
//! waited on through a [`Pacer`].

mod command;
mod motion;
mod pacing;
mod state;
mod waypoint;

pub use command::{ChannelPublisher, CommandPublisher, PublishError, RecordingPublisher, VelocityCommand};
pub use motion::SegmentPlan;
pub use pacing::{Pacer, RealTimePacer, SimulatedClock};
pub use state::ExecutorState;
pub use waypoint::{ExecutionReport, ExecutorConfig, ExecutorError, SegmentReport, WaypointExecutor};
