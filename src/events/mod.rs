//! Notification data model.
//!
//! ## Contents
//! - [`Notification`], [`NotificationKind`] one delivery to an observer, materialized as a value
//!
//! Notifications are what the core hands to observers (`on_next` / `on_error` /
//! `on_complete`). The enum form is used where a delivery must be stored or
//! forwarded: logging, the async stream bridge, and test recorders.

mod notification;

pub use notification::{Notification, NotificationKind};
