use std::time::{Duration, Instant};

/// Wall-clock time between consecutive frames.
#[derive(Debug)]
pub struct FrameClock {
    last: Instant,
    delta: Duration,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    fn starting_at(now: Instant) -> Self {
        Self {
            last: now,
            delta: Duration::ZERO,
        }
    }

    /// Marks a new frame and returns seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        self.delta = now.saturating_duration_since(self.last);
        self.last = now;
        self.delta.as_secs_f32()
    }

    /// Seconds covered by the most recent frame.
    pub fn delta_time(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
