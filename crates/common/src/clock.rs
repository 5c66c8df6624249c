//! Animation clock and timing utilities.
//!
//! The transition engine is driven by explicit nanosecond timestamps so
//! any scheduler can drive it. This module provides:
//! - `AnimationClock`: the default monotonic time source for UI drivers
//! - Nanosecond/second conversions
//! - `FrameTicker`: a rate gate for fixed-fps tick loops

use std::time::Instant;

/// A monotonic clock anchored to a fixed epoch (the moment the driver
/// was created). Timestamps from one clock are comparable to each other
/// but not across clocks.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    /// The instant the clock was started.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl AnimationClock {
    /// Create a new clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Create a clock from a known epoch.
    pub fn from_epoch(epoch: Instant, wall: String) -> Self {
        Self {
            epoch,
            epoch_wall: wall,
        }
    }

    /// Get nanoseconds elapsed since the epoch.
    pub fn elapsed_ns(&self) -> u64 {
        self.epoch.elapsed().as_nanos() as u64
    }

    /// Get seconds elapsed since the epoch.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Wall-clock time at the epoch.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// The underlying epoch instant.
    pub fn epoch(&self) -> Instant {
        self.epoch
    }

    /// Convert an elapsed nanosecond value to seconds.
    pub fn ns_to_secs(ns: u64) -> f64 {
        ns as f64 / 1_000_000_000.0
    }

    /// Convert seconds to nanoseconds.
    pub fn secs_to_ns(secs: f64) -> u64 {
        (secs * 1_000_000_000.0) as u64
    }

    /// Convert milliseconds to nanoseconds.
    pub fn ms_to_ns(ms: u64) -> u64 {
        ms * 1_000_000
    }
}

/// Frame rate gate for tick loops.
#[derive(Debug)]
pub struct FrameTicker {
    target_interval_ns: u64,
    last_tick_ns: Option<u64>,
}

impl FrameTicker {
    /// Create a ticker targeting the given Hz rate.
    pub fn new(target_hz: u32) -> Self {
        Self {
            target_interval_ns: 1_000_000_000 / target_hz as u64,
            last_tick_ns: None,
        }
    }

    /// Check if enough time has passed for the next tick.
    /// Returns true and updates internal state if ready.
    /// The first call always returns true.
    pub fn should_tick(&mut self, current_ns: u64) -> bool {
        match self.last_tick_ns {
            None => {
                self.last_tick_ns = Some(current_ns);
                true
            }
            Some(last) if current_ns >= last + self.target_interval_ns => {
                self.last_tick_ns = Some(current_ns);
                true
            }
            _ => false,
        }
    }

    /// Target interval in nanoseconds.
    pub fn interval_ns(&self) -> u64 {
        self.target_interval_ns
    }
}
