//! Step pacing for animations and sensor polling.
//!
//! Nothing here sleeps. A [`StepClock`] only answers whether the next step is
//! due, so callers can poll it from a cooperative loop without blocking.

use embassy_time::{Duration, Instant};

/// Number of missed steps after which the schedule restarts from `now`.
///
/// If we fall behind by more than this, we skip the backlog instead of catching up.
const MAX_DRIFT_STEPS: u32 = 2;

/// Fixed-interval step clock with drift correction
///
/// The schedule is anchored at the first poll, which is always due.
#[derive(Debug, Clone)]
pub struct StepClock {
    interval: Duration,
    next_step: Option<Instant>,
}

impl StepClock {
    /// Create a clock stepping every `interval`
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_step: None,
        }
    }

    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Deadline of the next step, if the clock has started
    pub const fn next_step(&self) -> Option<Instant> {
        self.next_step
    }

    /// Check if a step is due at `now`, consuming it if so
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(next_step) = self.next_step else {
            self.next_step = Some(now + self.interval);
            return true;
        };
        if now < next_step {
            return false;
        }

        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift = self.interval * MAX_DRIFT_STEPS;
        let anchor = if now > next_step + max_drift {
            now
        } else {
            next_step
        };
        self.next_step = Some(anchor + self.interval);
        true
    }

    /// Push the next deadline further out by `extra`
    ///
    /// Has no effect before the first poll.
    pub fn delay(&mut self, extra: Duration) {
        if let Some(next_step) = self.next_step {
            self.next_step = Some(next_step + extra);
        }
    }

    /// Forget the schedule; the next poll is due immediately
    pub fn reset(&mut self) {
        self.next_step = None;
    }
}
