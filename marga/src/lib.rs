//! # Marga: collision-validated waypoint execution
//!
//! Geometry and control plumbing between a sampling-based planner and a
//! differential-drive base that is driven open-loop.
//!
//! ## Quick Start
//!
//! ```rust
//! use marga::config::MargaConfig;
//! use marga::core::Point2D;
//! use marga::executor::{RecordingPublisher, SimulatedClock, WaypointExecutor};
//! use marga::path::Path;
//!
//! let config = MargaConfig::from_yaml(
//!     "workspace:\n  circles:\n    - { x: 3.0, y: 3.0, radius: 0.5 }\n",
//! )
//! .unwrap();
//!
//! // Validate the planner's output against the inflated obstacles
//! let oracle = config.oracle().unwrap();
//! let raw = Path::from_points(vec![Point2D::new(4.5, 1.5), Point2D::new(4.5, 4.5)]);
//! assert_eq!(oracle.first_blocked_segment(&raw), None);
//!
//! // Down-sample, move into the execution frame and drive it
//! let waypoints = config.post_processor().unwrap().process(&raw);
//! let mut executor = WaypointExecutor::new(
//!     config.executor_config(),
//!     config.start_pose(),
//!     RecordingPublisher::new(),
//!     SimulatedClock::new(),
//! )
//! .unwrap();
//! let report = executor.execute(&waypoints).unwrap();
//! assert_eq!(report.segments.len(), 2);
//! ```
//!
//! ## Architecture
//!
//! - [`core`]: Point2D, Node, Pose2D, Bounds, angle math
//! - [`obstacle`]: rectangle, boundary and circle obstacles; ObstacleMap
//! - [`collision`]: ray primitives and the CollisionOracle
//! - [`path`]: Path, down-sampling, execution frame transform
//! - [`executor`]: rotate-then-translate waypoint executor
//! - [`planner`]: planner boundary traits
//! - [`viz`]: visualization sinks (SVG)
//! - [`config`]: YAML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   PathPlanner ──raw path──▶ CollisionOracle (warn on blocked segments)
//!        │                          │
//!        ▼                          ▼
//!   VisualizationSink ◀──── PathPostProcessor (down-sample, transform)
//!                                   │
//!                                   ▼
//!                           WaypointExecutor ──▶ CommandPublisher
//! ```
//!
//! ## Coordinate Frames
//!
//! The planner works in the planning frame. Commands are computed in the
//! execution frame, reached through `(x, y) -> (y, K - x)` with `K` the
//! configured workspace extent.

pub mod collision;
pub mod config;
pub mod core;
pub mod executor;
pub mod obstacle;
pub mod path;
pub mod planner;
pub mod viz;

pub use collision::{CollisionChecker, CollisionOracle};
pub use config::{ConfigError, ConfigLoadError, MargaConfig};
pub use core::{Point2D, Pose2D};
pub use executor::{WaypointExecutor, VelocityCommand};
pub use path::{Path, PathPostProcessor};
