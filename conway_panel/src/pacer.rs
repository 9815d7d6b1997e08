// pacer.rs - Frame timing against the epoch's target interval

use std::time::{Duration, Instant};

/// Remembers when the last frame started so the loop can wait out the rest of the interval.
#[derive(Debug, Default, Clone)]
pub struct FramePacer {
    frame_start: Option<Instant>,
    frames: u64,
}

impl FramePacer {
    pub fn is_due(&self, now: Instant, interval: Duration) -> bool {
        self.remaining(now, interval).is_zero()
    }

    pub fn begin_frame(&mut self, now: Instant) {
        self.frame_start = Some(now);
        self.frames += 1;
    }

    /// Time left before the next frame may start; zero if it is already late.
    pub fn remaining(&self, now: Instant, interval: Duration) -> Duration {
        match self.frame_start {
            Some(start) => (start + interval).saturating_duration_since(now),
            None => Duration::ZERO,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}
