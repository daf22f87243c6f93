//! # Time sources for age-bounded replay.
//!
//! [`Replay`](crate::Replay) stamps every retained value with [`Clock::now`]
//! and compares ages against its window. [`SystemClock`] reads the monotonic
//! OS clock; [`ManualClock`] only moves when told to, which keeps window
//! behaviour deterministic in tests and simulations.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Monotonic time source.
pub trait Clock {
    /// Current instant. Must never go backwards.
    fn now(&self) -> Instant;
}

/// Monotonic OS clock (`Instant::now`).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock.
///
/// Clones share the same time line, so a test can keep one handle and give
/// another to the broadcaster.
///
/// ```rust
/// use std::time::Duration;
/// use replaycast::{Clock, ManualClock};
///
/// let clock = ManualClock::new();
/// let handle = clock.clone();
/// let t0 = clock.now();
/// handle.advance(Duration::from_millis(250));
/// assert_eq!(clock.now() - t0, Duration::from_millis(250));
/// ```
#[derive(Clone, Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Creates a clock frozen at the current OS instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    /// Moves time forward by `by` for every clone of this clock.
    ///
    /// Saturates at the latest instant the platform can represent.
    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.get();
        let mut remaining = by;
        let mut step = by;
        while !remaining.is_zero() && !step.is_zero() {
            match self.fits(offset, step.min(remaining)) {
                Some(next) => {
                    remaining -= next - offset;
                    offset = next;
                }
                None => step /= 2,
            }
        }
        self.offset.set(offset);
    }

    /// `offset + step` if `origin` can still be moved that far.
    fn fits(&self, offset: Duration, step: Duration) -> Option<Duration> {
        let next = offset.checked_add(step)?;
        self.origin.checked_add(next).map(|_| next)
    }

    /// Total time advanced since creation.
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    #[inline]
    fn now(&self) -> Instant {
        // `advance` keeps `origin + offset` representable
        self.origin + self.offset.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_is_frozen_until_advanced() {
        let clock = ManualClock::new();
        let a = clock.now();
        let b = clock.now();
        assert_eq!(a, b);

        clock.advance(Duration::from_secs(2));
        assert_eq!(clock.now() - a, Duration::from_secs(2));
        assert_eq!(clock.elapsed(), Duration::from_secs(2));
    }

    #[test]
    fn test_advance_saturates_instead_of_overflowing() {
        let clock = ManualClock::new();
        let start = clock.now();

        clock.advance(Duration::MAX);
        let far = clock.now();
        assert!(far > start);

        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.now(), far);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let a = clock.now();
        let b = clock.now();
        assert!(b >= a);
    }
}
