//! Frame timing for the present loop

use std::time::{Duration, Instant};

/// Summary of a finished frame loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStats {
    /// Number of frames presented
    pub frames: u64,
    /// Wall time spent in the loop
    pub elapsed: Duration,
}

impl FrameStats {
    /// Average frames per second over the whole loop
    pub fn average_fps(&self) -> f32 {
        let secs = self.elapsed.as_secs_f32();
        if secs > 0.0 {
            self.frames as f32 / secs
        } else {
            0.0
        }
    }
}

/// Counts presented frames since the loop started
pub struct FrameTimer {
    started: Instant,
    frames: u64,
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::start()
    }
}

impl FrameTimer {
    /// Start timing now
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            frames: 0,
        }
    }

    /// Record one presented frame
    pub fn frame_presented(&mut self) {
        self.frames += 1;
    }

    /// Number of frames recorded so far
    pub const fn frames(&self) -> u64 {
        self.frames
    }

    /// Snapshot of the frames and elapsed time so far
    pub fn stats(&self) -> FrameStats {
        FrameStats {
            frames: self.frames,
            elapsed: self.started.elapsed(),
        }
    }
}
