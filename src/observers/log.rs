//! # Simple logging observer for debugging and demos.
//!
//! [`LogObserver`] writes every notification it receives as a `tracing`
//! event at `INFO` level. Install any `tracing` subscriber to see them.
//!
//! ## Output format (with `tracing_subscriber::fmt`)
//! ```text
//! INFO replaycast::observers::log: notification observer="prices" kind="next" value=42
//! INFO replaycast::observers::log: notification observer="prices" kind="error" error="feed lost"
//! INFO replaycast::observers::log: notification observer="prices" kind="complete"
//! ```
//!
//! ## Example
//! ```no_run
//! use replaycast::{Broadcaster, LogObserver};
//!
//! let prices = Broadcaster::<u32, String>::new();
//! prices.subscribe(LogObserver::new("prices"));
//! prices.next(42);
//! ```

use std::fmt::Debug;

use crate::events::NotificationKind;
use crate::observers::Observer;

/// `tracing`-backed observer.
///
/// Enabled via the `logging` feature. Not intended for production pipelines;
/// implement [`Observer`] for structured sinks.
#[derive(Clone, Copy, Debug)]
pub struct LogObserver {
    name: &'static str,
}

impl LogObserver {
    /// Creates an observer whose events carry `observer = name`.
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }

    /// Returns the name attached to every event.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new("broadcaster")
    }
}

impl<T: Debug, E: Debug> Observer<T, E> for LogObserver {
    fn on_next(&self, value: &T) {
        tracing::info!(
            observer = self.name,
            kind = NotificationKind::Next.as_label(),
            value = ?value,
            "notification"
        );
    }

    fn on_error(&self, error: &E) {
        tracing::info!(
            observer = self.name,
            kind = NotificationKind::Error.as_label(),
            error = ?error,
            "notification"
        );
    }

    fn on_complete(&self) {
        tracing::info!(
            observer = self.name,
            kind = NotificationKind::Complete.as_label(),
            "notification"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_name() {
        assert_eq!(LogObserver::default().name(), "broadcaster");
    }

    #[test]
    fn test_handlers_do_not_panic_without_subscriber() {
        let obs = LogObserver::new("test");
        Observer::<u32, String>::on_next(&obs, &1);
        Observer::<u32, String>::on_error(&obs, &"e".to_string());
        Observer::<u32, String>::on_complete(&obs);
    }
}
