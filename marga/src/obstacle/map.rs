//! Shared obstacle storage with whole-set replacement.

use std::sync::{Arc, RwLock};

use crate::config::ConfigError;

use super::model::{Circle, ObstacleSet, Rect};

/// Holder of the current obstacle set.
///
/// Readers take an `Arc` snapshot and keep using it for as long as they
/// need; writers swap in a complete new set. A reader therefore sees either
/// the old or the new set, never a mix of the two.
#[derive(Debug, Default)]
pub struct ObstacleMap {
    current: RwLock<Arc<ObstacleSet>>,
}

impl ObstacleMap {
    /// Create a map holding `set`.
    pub fn new(set: ObstacleSet) -> Self {
        Self {
            current: RwLock::new(Arc::new(set)),
        }
    }

    /// Current set.
    pub fn snapshot(&self) -> Arc<ObstacleSet> {
        // A poisoned lock still holds a complete set; the swap below is a
        // single pointer store.
        match self.current.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    /// Replace the whole set.
    pub fn replace(&self, set: ObstacleSet) {
        let set = Arc::new(set);
        match self.current.write() {
            Ok(mut guard) => *guard = set,
            Err(poisoned) => *poisoned.into_inner() = set,
        }
        log::debug!("Obstacle set replaced");
    }

    /// Validate and install new obstacle lists.
    ///
    /// On error the previous set stays in place.
    pub fn update(
        &self,
        boundaries: Vec<Rect>,
        rectangles: Vec<Rect>,
        circles: Vec<Circle>,
    ) -> Result<(), ConfigError> {
        let set = ObstacleSet::new(boundaries, rectangles, circles)?;
        log::info!(
            "Updating obstacles: {} boundary, {} rectangles, {} circles",
            set.boundaries().len(),
            set.rectangles().len(),
            set.circles().len()
        );
        self.replace(set);
        Ok(())
    }
}
