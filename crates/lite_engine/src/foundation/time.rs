//! Time management utilities
//!
//! The engine polls a monotonically increasing seconds value once per frame
//! and derives the wall-clock delta from consecutive samples. That delta
//! drives camera and input; physics integrates with its own fixed timestep.

use std::time::Instant;

/// Source of monotonically increasing wall-clock seconds
pub trait TimeSource {
    /// Seconds elapsed since some fixed origin
    fn now_seconds(&self) -> f64;
}

/// Time source backed by `std::time::Instant`
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Create a clock whose origin is "now"
    pub fn new() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now_seconds(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Frame timer fed by a time source
#[derive(Debug, Clone)]
pub struct Timer {
    last_sample: Option<f64>,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_sample: None,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Record a new time sample (should be called once per frame)
    ///
    /// The first sample only establishes the baseline, so its delta is zero.
    /// Samples that go backwards are clamped to a zero delta.
    #[allow(clippy::cast_possible_truncation)]
    pub fn tick(&mut self, now_seconds: f64) -> f32 {
        self.delta_time = match self.last_sample {
            Some(last) => (now_seconds - last).max(0.0) as f32,
            None => 0.0,
        };
        self.last_sample = Some(now_seconds);
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since the first sample
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since the first sample
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }

    /// Get the current FPS (based on last frame time)
    pub fn current_fps(&self) -> f32 {
        if self.delta_time > 0.0 {
            1.0 / self.delta_time
        } else {
            0.0
        }
    }
}
