//! Periodic cosmetic ticks for the TUI
//!
//! Two independent deadlines: the wall clock refreshes every second and the
//! background colour changes every two seconds. The event loop polls for input
//! until the nearer deadline, then calls [`CosmeticTimer::fire`].

use std::time::{Duration, Instant};

pub const CLOCK_PERIOD: Duration = Duration::from_secs(1);
pub const BACKGROUND_PERIOD: Duration = Duration::from_secs(2);

/// Which cosmetic updates are due
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fired {
    pub clock: bool,
    pub background: bool,
}

#[derive(Debug, Clone)]
pub struct CosmeticTimer {
    next_clock: Instant,
    next_background: Instant,
}

impl CosmeticTimer {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            next_clock: now + CLOCK_PERIOD,
            next_background: now + BACKGROUND_PERIOD,
        }
    }

    /// Time left before the next deadline; zero if one is already due
    #[must_use]
    pub fn until_next(&self, now: Instant) -> Duration {
        self.next_clock
            .min(self.next_background)
            .saturating_duration_since(now)
    }

    /// Report due updates and schedule the following ones
    ///
    /// Missed periods are skipped rather than replayed.
    pub fn fire(&mut self, now: Instant) -> Fired {
        let mut fired = Fired::default();
        if now >= self.next_clock {
            fired.clock = true;
            self.next_clock = now + CLOCK_PERIOD;
        }
        if now >= self.next_background {
            fired.background = true;
            self.next_background = now + BACKGROUND_PERIOD;
        }
        fired
    }
}
