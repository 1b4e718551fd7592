use std::time::{Duration, Instant};

/// Fixed-rate redraw scheduler.
///
/// Frames are scheduled on a fixed grid; if the loop falls behind, the grid
/// restarts from the current instant instead of bursting to catch up.
#[derive(Clone, Debug)]
pub struct FramePacer {
    interval: Duration,
    next_frame: Instant,
    last_tick: Option<Instant>,
}

impl FramePacer {
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: u32, now: Instant) -> Self {
        Self {
            interval: Duration::from_secs_f64(1.0 / f64::from(fps.max(1))),
            next_frame: now,
            last_tick: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    pub fn schedule_next(&mut self, now: Instant) {
        self.next_frame += self.interval;
        if self.next_frame <= now {
            self.next_frame = now + self.interval;
        }
    }

    /// Seconds since the previous tick; zero on the first one.
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        dt
    }
}
