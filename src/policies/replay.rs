//! # History-replay policy.
//!
//! [`Replay`] keeps up to [`ReplayConfig::capacity`] values, each stamped with
//! the instant it was recorded.
//!
//! ## Eviction
//! ```text
//! record(v):  push_back (v, now)
//!             ├─► pop_front while len > capacity
//!             └─► pop_front while now - emitted_at > window   (if window set)
//!
//! replay():   pop_front while now - emitted_at > window       (idle gaps)
//!             └─► clone remaining values, oldest first
//! ```
//!
//! Entries are recorded in time order, so expired entries are always at the
//! front of the buffer.
//!
//! # Example
//! ```rust
//! use replaycast::{BufferPolicy, Replay, ReplayConfig};
//!
//! let mut policy = Replay::new(ReplayConfig::new(3)).unwrap();
//! for v in 1..=5 {
//!     policy.record(&v);
//! }
//! assert_eq!(policy.replay(), vec![3, 4, 5]);
//! ```

use std::collections::VecDeque;
use std::time::Instant;

use crate::error::Result;
use crate::policies::clock::{Clock, SystemClock};
use crate::policies::config::ReplayConfig;
use crate::policies::BufferPolicy;

/// A retained value and the instant it was recorded.
#[derive(Clone, Debug)]
struct Entry<T> {
    value: T,
    emitted_at: Instant,
}

/// Retains the most recent values, bounded by count and optionally by age.
#[derive(Clone, Debug)]
pub struct Replay<T, C = SystemClock> {
    config: ReplayConfig,
    clock: C,
    entries: VecDeque<Entry<T>>,
}

impl<T> Replay<T, SystemClock> {
    /// Creates a policy stamped by the OS monotonic clock.
    ///
    /// Fails with [`BroadcastError::ZeroCapacity`](crate::BroadcastError::ZeroCapacity)
    /// when `config.capacity == 0`.
    pub fn new(config: ReplayConfig) -> Result<Self> {
        Self::with_clock(config, SystemClock)
    }
}

impl<T, C: Clock> Replay<T, C> {
    /// Creates a policy stamped by a caller-provided clock.
    pub fn with_clock(config: ReplayConfig, clock: C) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock,
            entries: VecDeque::new(),
        })
    }

    /// Returns the configuration this policy was built with.
    #[inline]
    pub fn config(&self) -> &ReplayConfig {
        &self.config
    }

    fn evict_expired(&mut self, now: Instant) {
        let Some(window) = self.config.window_limit() else {
            return;
        };
        while let Some(front) = self.entries.front() {
            if now.saturating_duration_since(front.emitted_at) > window {
                self.entries.pop_front();
            } else {
                break;
            }
        }
    }
}

impl<T: Clone, C: Clock> BufferPolicy<T> for Replay<T, C> {
    fn record(&mut self, value: &T) {
        let now = self.clock.now();
        self.entries.push_back(Entry {
            value: value.clone(),
            emitted_at: now,
        });
        while self.entries.len() > self.config.capacity {
            self.entries.pop_front();
        }
        self.evict_expired(now);
    }

    fn replay(&mut self) -> Vec<T> {
        let now = self.clock.now();
        self.evict_expired(now);
        self.entries.iter().map(|e| e.value.clone()).collect()
    }

    #[inline]
    fn retained(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::ManualClock;
    use std::time::Duration;

    fn windowed(capacity: usize, window_ms: u64) -> (Replay<u32, ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let cfg = ReplayConfig::new(capacity).with_window(Duration::from_millis(window_ms));
        let policy = Replay::with_clock(cfg, clock.clone()).unwrap();
        (policy, clock)
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(Replay::<u32>::new(ReplayConfig::new(0)).is_err());
    }

    #[test]
    fn test_keeps_most_recent_by_count() {
        let mut policy = Replay::new(ReplayConfig::new(2)).unwrap();
        policy.record(&1);
        policy.record(&2);
        policy.record(&3);
        assert_eq!(policy.retained(), 2);
        assert_eq!(policy.replay(), vec![2, 3]);
    }

    #[test]
    fn test_window_evicts_on_write() {
        let (mut policy, clock) = windowed(10, 100);
        policy.record(&1);
        clock.advance(Duration::from_millis(60));
        policy.record(&2);
        clock.advance(Duration::from_millis(60));
        policy.record(&3);

        // 1 is 120ms old, 2 is 60ms old
        assert_eq!(policy.retained(), 2);
        assert_eq!(policy.replay(), vec![2, 3]);
    }

    #[test]
    fn test_window_evicts_on_read_after_idle_gap() {
        let (mut policy, clock) = windowed(10, 100);
        policy.record(&1);
        policy.record(&2);
        assert_eq!(policy.retained(), 2);

        clock.advance(Duration::from_millis(101));
        assert!(policy.replay().is_empty());
        assert_eq!(policy.retained(), 0);
    }

    #[test]
    fn test_entry_at_exact_window_age_is_kept() {
        let (mut policy, clock) = windowed(10, 100);
        policy.record(&1);
        clock.advance(Duration::from_millis(100));
        assert_eq!(policy.replay(), vec![1]);
    }

    #[test]
    fn test_count_and_window_combine() {
        let (mut policy, clock) = windowed(3, 1_000);
        for v in 1..=5 {
            policy.record(&v);
            clock.advance(Duration::from_millis(400));
        }
        // values 3,4,5 survive the count bound; 3 is 1200ms old at read time
        assert_eq!(policy.replay(), vec![4, 5]);
    }
}
