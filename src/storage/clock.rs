//! Time Source
//!
//! The store never reads the wall clock directly; every "now" comes from a
//! [`Clock`], so expiration can be driven by hand.

use chrono::{DateTime, TimeDelta, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the current instant
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
///
/// Clones share the same instant, so a handle kept outside the store can
/// advance the time the store sees.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::starting_at(Utc::now())
    }
}

impl ManualClock {
    pub fn starting_at(now: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(now)),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        self.now.set(now);
    }

    /// Move the clock forward (or backward, for a negative delta).
    /// A move past the representable range leaves the clock where it is.
    pub fn advance(&self, by: TimeDelta) {
        if let Some(now) = self.now.get().checked_add_signed(by) {
            self.now.set(now);
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let start = Utc::now();
        let clock = ManualClock::starting_at(start);
        let handle = clock.clone();

        handle.advance(TimeDelta::seconds(2));
        assert_eq!(clock.now(), start + TimeDelta::seconds(2));

        handle.set(start);
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let before = Utc::now();
        assert!(SystemClock.now() >= before);
    }
}
