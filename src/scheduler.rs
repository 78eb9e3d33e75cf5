//! Fixed-interval tick scheduling for the runner loop.
//!
//! The runner asks how long it may block on input ([`TickScheduler::poll_timeout`])
//! and whether a tick is due ([`TickScheduler::due`]). At most one tick fires per
//! call, so a stalled frame never produces a burst of gravity steps. Once
//! stopped, the scheduler never fires again.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct TickScheduler {
    interval: Duration,
    last_tick: Instant,
    stopped: bool,
}

impl TickScheduler {
    pub fn new(interval: Duration) -> Self {
        Self::starting_at(interval, Instant::now())
    }

    pub fn starting_at(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_tick: now,
            stopped: false,
        }
    }

    /// Time left until the next tick, or `None` once stopped.
    pub fn poll_timeout(&self, now: Instant) -> Option<Duration> {
        if self.stopped {
            return None;
        }
        Some(
            self.interval
                .saturating_sub(now.saturating_duration_since(self.last_tick)),
        )
    }

    /// True when a tick should run now; the next one is scheduled from `now`.
    pub fn due(&mut self, now: Instant) -> bool {
        if self.stopped || now.saturating_duration_since(self.last_tick) < self.interval {
            return false;
        }
        self.last_tick = now;
        true
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
