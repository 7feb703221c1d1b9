//! Fixed-period tick scheduling
//!
//! The GUI only runs when it repaints, so clock ticks are derived from wall
//! time: each frame asks how many periods have passed since the deadline.
//! There is a single deadline, which makes overlapping timers impossible.

use std::time::{Duration, Instant};

/// Shortest allowed tick period
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

#[derive(Debug, Clone)]
pub struct TickScheduler {
    period: Duration,
    deadline: Option<Instant>,
}

impl TickScheduler {
    /// Periods shorter than [`MIN_PERIOD`] are raised to it
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            deadline: None,
        }
    }

    #[inline]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Schedule the first tick one period after `now`; keeps an existing deadline
    pub fn arm(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.period);
        }
    }

    /// Cancel the pending tick
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Number of ticks that fell due by `now`; advances the deadline past them
    pub fn due(&mut self, now: Instant) -> u32 {
        let Some(deadline) = self.deadline else {
            return 0;
        };
        if now < deadline {
            return 0;
        }

        let late = now.duration_since(deadline).as_nanos() / self.period.as_nanos();
        let ticks = u32::try_from(late + 1).unwrap_or(u32::MAX);
        self.deadline = Some(deadline + self.period * ticks);
        ticks
    }

    /// Time left until the next tick
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|deadline| deadline.saturating_duration_since(now))
    }
}
