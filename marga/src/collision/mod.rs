//! Straight-line collision validation.
//!
//! [`CollisionOracle`] answers "is the segment `a → b` obstacle-free?" for a
//! fixed obstacle set and inflation margin. The planner programs against the
//! [`CollisionChecker`] trait; [`ray`] holds the parametric primitives.

mod oracle;
pub mod ray;

pub use oracle::{CollisionChecker, CollisionOracle};
pub use ray::{Ray, segment_intersects_circle, segment_intersects_rect_edge};
