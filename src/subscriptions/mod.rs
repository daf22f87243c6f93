//! # Subscription handles.
//!
//! Every [`Broadcaster::subscribe`](crate::Broadcaster::subscribe) call returns a
//! [`Subscription`]. This module also provides two lifecycle helpers built on it.
//!
//! ## Contents
//! - [`Subscription`]      idempotent cancellation handle (live or inert)
//! - [`SubscriptionGuard`] unsubscribes when dropped
//! - [`SubscriptionSet`]   cancels many subscriptions at once
//!
//! ## Rules
//! - Dropping a [`Subscription`] does **not** unsubscribe; call
//!   [`Subscription::unsubscribe`] or convert it with [`Subscription::guard`].
//! - A subscription made on an already-terminal broadcaster is inert:
//!   it is born closed and `unsubscribe` is a no-op.
//! - A live subscription closes when unsubscribed or when the terminal
//!   notification reaches its observer.

mod guard;
mod set;
mod subscription;

pub use guard::SubscriptionGuard;
pub use set::SubscriptionSet;
pub use subscription::Subscription;

pub(crate) use subscription::Teardown;
