//! # Replay buffer configuration.
//!
//! Provides [`ReplayConfig`], the knobs of the history-replay policy.
//!
//! ## Sentinel values
//! - `window = 0s` → no age limit (entries are evicted by count only)
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use replaycast::ReplayConfig;
//!
//! let cfg = ReplayConfig::new(16).with_window(Duration::from_secs(30));
//! assert_eq!(cfg.window_limit(), Some(Duration::from_secs(30)));
//! assert!(cfg.validate().is_ok());
//!
//! assert!(ReplayConfig::new(0).validate().is_err());
//! ```

use std::time::Duration;

use crate::error::{BroadcastError, Result};

/// Configuration for [`Replay`](crate::Replay).
///
/// ## Field semantics
/// - `capacity`: maximum number of retained values (must be `>= 1`)
/// - `window`: maximum age of a retained value (`0s` = unbounded)
///
/// All fields are public; prefer [`ReplayConfig::window_limit`] over checking
/// the `0s` sentinel directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Maximum number of values kept for replay.
    ///
    /// On every write the oldest values are dropped while the buffer holds
    /// more than `capacity` entries.
    pub capacity: usize,

    /// Time-to-live of each retained value, measured from its emission.
    ///
    /// - `Duration::ZERO` = no age limit
    /// - `> 0` = entries older than `window` are dropped on write and before replay
    pub window: Duration,
}

impl ReplayConfig {
    /// Creates a count-bounded configuration with no age limit.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            window: Duration::ZERO,
        }
    }

    /// Sets the per-entry time-to-live.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Returns the age limit as an `Option`.
    ///
    /// - `None` → entries never expire by age
    /// - `Some(d)` → entries older than `d` are evicted
    #[inline]
    pub fn window_limit(&self) -> Option<Duration> {
        if self.window == Duration::ZERO {
            None
        } else {
            Some(self.window)
        }
    }

    /// Rejects configurations that cannot hold a single value.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(BroadcastError::ZeroCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_window_means_unbounded() {
        assert_eq!(ReplayConfig::new(4).window_limit(), None);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            ReplayConfig::new(0).validate(),
            Err(BroadcastError::ZeroCapacity)
        );
        assert_eq!(ReplayConfig::new(1).validate(), Ok(()));
    }
}
