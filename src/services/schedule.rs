//! Periodic timers driving the dashboard event loop.

use std::time::{Duration, Instant};

const MIN_PERIOD: Duration = Duration::from_millis(100);

/// Fixed-period timer that fires on its first poll and every `period` after.
#[derive(Debug)]
pub struct Interval {
    period: Duration,
    next_due: Option<Instant>,
    fired: u64,
}

impl Interval {
    /// Construct a timer with the supplied period, clamped to a 100 ms floor.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(MIN_PERIOD),
            next_due: None,
            fired: 0,
        }
    }

    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of times the timer has fired.
    #[must_use]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Fire if due at `now`, scheduling the next deadline.
    ///
    /// Missed periods are not replayed: a late poll fires once and the next
    /// deadline is one period after `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now < due => false,
            _ => {
                self.next_due = Some(now + self.period);
                self.fired += 1;
                true
            }
        }
    }

    /// Time left until the timer is due; zero when it is already due.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next_due
            .map_or(Duration::ZERO, |due| due.saturating_duration_since(now))
    }
}
