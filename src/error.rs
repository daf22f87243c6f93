//! Error types returned by the broadcaster API.
//!
//! Most of the API is infallible by contract: `next` after termination is
//! silently ignored and a producer error is delivered verbatim to observers.
//! [`BroadcastError`] covers the remaining cases:
//!
//! - [`BroadcastError::ZeroCapacity`]: a replay buffer was configured with capacity `0`.
//! - [`BroadcastError::Terminated`]: a `try_*` emission hit an already-terminal stream.
//!
//! Both variants provide `as_label` / `as_message` for logging.

use thiserror::Error;

use crate::core::Status;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, BroadcastError>;

/// # Errors produced by broadcaster construction and fallible emission.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BroadcastError {
    /// Replay capacity must hold at least one value.
    #[error("replay capacity must be at least 1")]
    ZeroCapacity,

    /// The stream already completed or errored; the emission was dropped.
    #[error("broadcaster already terminated ({status})")]
    Terminated {
        /// Terminal status observed at the time of the call.
        status: Status,
    },
}

impl BroadcastError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use replaycast::{BroadcastError, Status};
    ///
    /// let err = BroadcastError::Terminated { status: Status::Completed };
    /// assert_eq!(err.as_label(), "broadcast_terminated");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            BroadcastError::ZeroCapacity => "replay_zero_capacity",
            BroadcastError::Terminated { .. } => "broadcast_terminated",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            BroadcastError::ZeroCapacity => "replay capacity=0; expected >= 1".to_string(),
            BroadcastError::Terminated { status } => {
                format!("emission after termination; status={status}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(BroadcastError::ZeroCapacity.as_label(), "replay_zero_capacity");
        let err = BroadcastError::Terminated {
            status: Status::Errored,
        };
        assert_eq!(err.as_label(), "broadcast_terminated");
    }

    #[test]
    fn test_display_includes_status() {
        let err = BroadcastError::Terminated {
            status: Status::Completed,
        };
        assert_eq!(err.to_string(), "broadcaster already terminated (completed)");
        assert_eq!(err.as_message(), "emission after termination; status=completed");
    }
}
