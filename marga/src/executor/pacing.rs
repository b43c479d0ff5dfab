//! Control-period pacing.

use std::thread;
use std::time::Duration;

/// Blocks (or pretends to block) for one control period.
pub trait Pacer {
    fn wait(&mut self, period: Duration);
}

impl<C: Pacer + ?Sized> Pacer for &mut C {
    fn wait(&mut self, period: Duration) {
        (**self).wait(period)
    }
}

/// Sleeps the calling thread for each period.
#[derive(Clone, Copy, Debug, Default)]
pub struct RealTimePacer;

impl Pacer for RealTimePacer {
    fn wait(&mut self, period: Duration) {
        thread::sleep(period);
    }
}

/// Accumulates simulated time without sleeping.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SimulatedClock {
    elapsed: Duration,
    ticks: u64,
}

impl SimulatedClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total simulated time waited.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of `wait` calls.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Pacer for SimulatedClock {
    fn wait(&mut self, period: Duration) {
        self.elapsed += period;
        self.ticks += 1;
    }
}
