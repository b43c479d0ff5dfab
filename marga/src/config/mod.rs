//! Configuration loading for Marga.
//!
//! Everything lives in one YAML file; every section and field has a
//! default, so an empty file is a valid configuration.
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`CollisionSection`] | Inflation margin |
//! | [`PathSection`] | Down-sampling threshold, frame extent |
//! | [`ExecutorSection`] | Speeds, control periods, start pose |
//! | [`WorkspaceSection`] | Boundary, rectangle and circle obstacles |
//!
//! ## Example YAML
//!
//! ```yaml
//! collision:
//!   inflation_margin: 0.5
//! path:
//!   downsample_threshold: 0.2
//!   workspace_extent: 5.0
//! executor:
//!   linear_speed: 0.1        # m/s
//!   angular_speed: 0.1       # rad/s
//!   rotation_period: 0.02    # s
//!   translation_period: 0.04 # s
//!   start_pose: { x: 1.5, y: 0.5, theta: 0.0 }
//! workspace:
//!   boundary: []
//!   rectangles: []
//!   circles: []
//! ```

mod collision;
mod defaults;
pub mod error;
mod executor;
mod marga;
mod path;
mod workspace;

pub use error::{ConfigError, ConfigLoadError};
pub use marga::MargaConfig;

pub use collision::CollisionSection;
pub use executor::ExecutorSection;
pub use path::PathSection;
pub use workspace::WorkspaceSection;
