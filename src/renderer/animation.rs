//! Entrance animation for a freshly placed panel
//!
//! The panel fades in, grows from `start_scale` to full size and drifts the
//! last few pixels away from the tap point along its placement direction.
//! Sampling is a pure function of elapsed time; driving the clock is up to
//! the caller.

use crate::layout::{Direction, Point};

/// Parameters of the entrance animation
#[derive(Debug, Clone, PartialEq)]
pub struct EntranceAnimation {
    /// Total duration in milliseconds
    pub duration_ms: f64,
    /// Distance in pixels the panel travels while entering
    pub drift: f64,
    /// Scale at the first frame (1.0 = full size)
    pub start_scale: f64,
}

/// A single sampled animation frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    pub scale: f64,
    /// Translation relative to the final position
    pub translate: Point,
}

impl Frame {
    /// The resting frame once the animation has finished
    pub fn settled() -> Self {
        Self {
            opacity: 1.0,
            scale: 1.0,
            translate: Point::new(0.0, 0.0),
        }
    }
}

impl Default for EntranceAnimation {
    fn default() -> Self {
        Self {
            duration_ms: 220.0,
            drift: 12.0,
            start_scale: 0.85,
        }
    }
}

impl EntranceAnimation {
    /// Create a new animation with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the duration in milliseconds
    pub fn with_duration_ms(mut self, duration_ms: f64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the drift distance
    pub fn with_drift(mut self, drift: f64) -> Self {
        self.drift = drift;
        self
    }

    /// Set the starting scale
    pub fn with_start_scale(mut self, start_scale: f64) -> Self {
        self.start_scale = start_scale;
        self
    }

    /// Normalized progress in `[0, 1]` after `elapsed_ms`
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.progress(elapsed_ms) >= 1.0
    }

    /// Sample the frame for a panel placed in `direction` after `elapsed_ms`
    pub fn sample(&self, direction: Direction, elapsed_ms: f64) -> Frame {
        let t = ease_out_cubic(self.progress(elapsed_ms));
        let remaining = (1.0 - t) * self.drift;
        let unit = direction.unit_vector();

        Frame {
            opacity: t,
            scale: self.start_scale + (1.0 - self.start_scale) * t,
            // Start behind the final position, toward the tap point
            translate: Point::new(-unit.x * remaining, -unit.y * remaining),
        }
    }

    /// Sample `steps + 1` evenly spaced frames from start to finish
    pub fn keyframes(&self, direction: Direction, steps: usize) -> Vec<Frame> {
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| self.sample(direction, self.duration_ms * i as f64 / steps as f64))
            .collect()
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
