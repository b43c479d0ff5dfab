//! Waypoint paths and post-processing.
//!
//! Planner output is down-sampled in the planning frame and then mapped into
//! the execution frame by [`PathPostProcessor`].

mod downsample;
mod frame;
mod waypoints;

pub use downsample::Downsampler;
pub use frame::ExecutionFrame;
pub use waypoints::Path;

use log::debug;

/// Down-sample then transform, in that order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathPostProcessor {
    /// Distance filter, applied in the planning frame
    pub downsampler: Downsampler,
    /// Planning → execution frame mapping
    pub frame: ExecutionFrame,
}

impl PathPostProcessor {
    /// Create a post-processor from its two stages.
    pub fn new(downsampler: Downsampler, frame: ExecutionFrame) -> Self {
        Self { downsampler, frame }
    }

    /// Filtered path in the planning frame (first stage only).
    pub fn filter(&self, raw: &Path) -> Path {
        self.downsampler.downsample(raw)
    }

    /// Execution-frame waypoints for a raw planner path.
    pub fn process(&self, raw: &Path) -> Path {
        let filtered = self.filter(raw);
        debug!(
            "Post-processed path: {} raw -> {} waypoints (threshold {:.3}m)",
            raw.len(),
            filtered.len(),
            self.downsampler.threshold()
        );
        self.frame.transform_path(&filtered)
    }
}
