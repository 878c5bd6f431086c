//! Time management utilities

use std::time::Instant;

/// Snapshot of frame timing handed to per-frame update code
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    /// Seconds elapsed since the previous frame
    pub delta: f32,
    /// Seconds elapsed since the game started
    pub total: f32,
}

impl FrameTime {
    /// Create a frame time snapshot
    pub fn new(delta: f32, total: f32) -> Self {
        Self { delta, total }
    }
}

/// Source of frame deltas
///
/// Runs either against the wall clock or with a fixed simulated step, so a
/// headless loop and tests can replay exactly the same frame sequence.
#[derive(Debug, Clone)]
pub struct Timer {
    last_frame: Instant,
    fixed_step: Option<f32>,
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
    /// Create a wall-clock timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            fixed_step: None,
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Create a timer that advances by `step` seconds every frame
    pub fn fixed(step: f32) -> Self {
        Self {
            fixed_step: Some(step),
            ..Self::new()
        }
    }

    /// Update the timer (should be called once per frame)
    pub fn update(&mut self) -> FrameTime {
        let now = Instant::now();
        self.delta_time = match self.fixed_step {
            Some(step) => step,
            None => now.duration_since(self.last_frame).as_secs_f32(),
        };
        self.total_time += self.delta_time;
        self.last_frame = now;
        self.frame_count += 1;
        self.frame_time()
    }

    /// Timing of the most recent frame
    pub fn frame_time(&self) -> FrameTime {
        FrameTime::new(self.delta_time, self.total_time)
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the current frame count
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
