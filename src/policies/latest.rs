//! # Latest-value policy.
//!
//! [`Latest`] always holds exactly one value. There is no way to build it
//! without a seed, so a latest-value broadcaster can never be observed empty:
//!
//! ```compile_fail
//! use replaycast::Latest;
//!
//! let policy: Latest<u32> = Latest::default(); // no seed, no policy
//! ```

use crate::policies::BufferPolicy;

/// Retains the most recent value; new values overwrite it unconditionally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Latest<T> {
    value: T,
}

impl<T> Latest<T> {
    /// Creates the policy with its mandatory seed.
    pub fn new(seed: T) -> Self {
        Self { value: seed }
    }

    /// Returns the currently retained value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }
}

impl<T: Clone> BufferPolicy<T> for Latest<T> {
    fn record(&mut self, value: &T) {
        self.value = value.clone();
    }

    fn replay(&mut self) -> Vec<T> {
        vec![self.value.clone()]
    }

    #[inline]
    fn retained(&self) -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_replayed() {
        let mut policy = Latest::new("seed");
        assert_eq!(policy.replay(), vec!["seed"]);
        assert_eq!(policy.retained(), 1);
    }

    #[test]
    fn test_record_overwrites() {
        let mut policy = Latest::new(0);
        policy.record(&7);
        policy.record(&9);
        assert_eq!(*policy.get(), 9);
        assert_eq!(policy.replay(), vec![9]);
    }
}
