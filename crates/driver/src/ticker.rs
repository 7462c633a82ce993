//! Fixed-interval tick scheduling.
//!
//! The engine owns no timers; the driver asks the ticker how long it may wait
//! for input and how many gravity ticks have come due. Time is passed in so the
//! schedule can be tested without sleeping.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Instant,
}

impl Ticker {
    /// First tick is due one interval after `now`. A zero interval is raised to 1ms.
    pub fn new(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            next_due: now + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time left before the next tick (zero when one is already due)
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_due.saturating_duration_since(now)
    }

    /// Number of ticks that came due up to `now`, advancing the schedule past them.
    ///
    /// After a stall every missed tick is reported so gravity catches up.
    pub fn take_due(&mut self, now: Instant) -> u32 {
        let mut due = 0;
        while self.next_due <= now {
            self.next_due += self.interval;
            due += 1;
        }
        due
    }
}
