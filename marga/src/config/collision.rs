//! Collision configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Collision checking settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollisionSection {
    /// Safety buffer added around every obstacle (meters)
    #[serde(default = "defaults::inflation_margin")]
    pub inflation_margin: f32,
}

impl Default for CollisionSection {
    fn default() -> Self {
        Self {
            inflation_margin: defaults::inflation_margin(),
        }
    }
}
