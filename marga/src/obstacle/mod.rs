//! Obstacle model.
//!
//! - [`Rect`], [`Circle`] and [`Obstacle`]: typed primitives
//! - [`ObstacleSet`]: validated boundary, rectangle and circle lists
//! - [`InflatedRect`]: rectangle corners expanded by the inflation margin
//! - [`ObstacleMap`]: shared holder with atomic whole-set updates

mod inflation;
mod map;
mod model;

pub use inflation::{InflatedRect, inflate_all};
pub use map::ObstacleMap;
pub use model::{Circle, Obstacle, ObstacleSet, Rect};
