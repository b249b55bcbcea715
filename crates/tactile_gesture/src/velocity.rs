//! Release velocity estimation
//!
//! Hosts that do not report a release velocity can let the controller
//! estimate one from timestamped move samples. The estimate is the average
//! speed over the most recent window of samples, so a drag that stops before
//! release reads as slow even if it was fast earlier.

use smallvec::SmallVec;

/// Samples older than this (relative to the newest) are ignored
const WINDOW_MS: u64 = 100;
/// Maximum retained samples
const CAPACITY: usize = 8;

/// Tracks recent `(timestamp, position)` pairs along one axis
#[derive(Clone, Debug, Default)]
pub struct VelocityTracker {
    samples: SmallVec<[(u64, f32); CAPACITY]>,
}

impl VelocityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a position at a host timestamp
    ///
    /// Out-of-order timestamps reset the window.
    pub fn add(&mut self, timestamp_ms: u64, position: f32) {
        if !position.is_finite() {
            return;
        }
        if let Some(&(last, _)) = self.samples.last() {
            if timestamp_ms < last {
                self.samples.clear();
            }
        }
        if self.samples.len() == CAPACITY {
            self.samples.remove(0);
        }
        self.samples.push((timestamp_ms, position));
    }

    /// Estimated velocity in pixels per second (0 when unknown)
    pub fn velocity(&self) -> f32 {
        let Some(&(newest_t, newest_p)) = self.samples.last() else {
            return 0.0;
        };
        let oldest = self
            .samples
            .iter()
            .find(|(t, _)| newest_t - t <= WINDOW_MS)
            .copied();

        match oldest {
            Some((oldest_t, oldest_p)) if newest_t > oldest_t => {
                (newest_p - oldest_p) / (newest_t - oldest_t) as f32 * 1000.0
            }
            _ => 0.0,
        }
    }

    pub fn reset(&mut self) {
        self.samples.clear();
    }
}
