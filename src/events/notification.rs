//! # Materialized observer notifications.
//!
//! The [`NotificationKind`] enum classifies deliveries:
//! - **Value**: `Next` (repeatable)
//! - **Terminal**: `Error` / `Complete` (at most one per observer, always last)
//!
//! ## Example
//! ```rust
//! use replaycast::{Notification, NotificationKind};
//!
//! let n: Notification<u32, String> = Notification::Error("boom".into());
//! assert_eq!(n.kind(), NotificationKind::Error);
//! assert!(n.is_terminal());
//! assert_eq!(n.kind().as_label(), "error");
//! ```

use std::fmt;

use crate::observers::Observer;

/// Classification of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// A value delivered through `on_next`.
    Next,
    /// Terminal error delivered through `on_error`.
    Error,
    /// Terminal completion delivered through `on_complete`.
    Complete,
}

impl NotificationKind {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            NotificationKind::Next => "next",
            NotificationKind::Error => "error",
            NotificationKind::Complete => "complete",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// One delivery to an observer, as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification<T, E> {
    /// `on_next(value)`.
    Next(T),
    /// `on_error(error)`.
    Error(E),
    /// `on_complete()`.
    Complete,
}

impl<T, E> Notification<T, E> {
    /// Returns the kind of this notification.
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::Next(_) => NotificationKind::Next,
            Notification::Error(_) => NotificationKind::Error,
            Notification::Complete => NotificationKind::Complete,
        }
    }

    /// True for `Error` and `Complete`.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Notification::Next(_))
    }

    /// Invokes the matching handler on `observer`.
    pub fn deliver<O>(&self, observer: &O)
    where
        O: Observer<T, E> + ?Sized,
    {
        match self {
            Notification::Next(value) => observer.on_next(value),
            Notification::Error(err) => observer.on_error(err),
            Notification::Complete => observer.on_complete(),
        }
    }

    /// Returns the carried value for `Next`, `None` otherwise.
    pub fn into_value(self) -> Option<T> {
        match self {
            Notification::Next(value) => Some(value),
            _ => None,
        }
    }
}
