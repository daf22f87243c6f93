//! # replaycast
//!
//! **replaycast** is a synchronous, in-process multicast broadcaster.
//!
//! A producer pushes values with `next` and ends the stream with `error` or
//! `complete`; every subscribed observer is notified on the producer's call
//! stack, in subscription order. A pluggable buffer policy decides what an
//! observer that joins late gets replayed.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌────────────────┐
//!     │    Producer    │  next(v) / error(e) / complete()
//!     └───────┬────────┘
//!             ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Broadcaster (shared Rc<Core>)                                    │
//! │  - BufferPolicy (NoReplay | Latest | Replay)  ── record(&v)       │
//! │  - Terminal state (Active → Completed | Errored(e), one-way)      │
//! │  - Subscriber sequence (insertion order = delivery order)         │
//! └──────┬──────────────────┬──────────────────┬──────────────────────┘
//!        │ snapshot         │                  │
//!        ▼                  ▼                  ▼
//!   Observer 1         Observer 2         Observer N
//!   on_next(&v)        on_next(&v)        on_next(&v)
//! ```
//!
//! ### Late subscriber
//! ```text
//! subscribe(observer)
//!   ├─► policy.replay() ──► observer.on_next(..) for each retained value
//!   └─► terminal state?
//!         ├─ Active     ─► register, return live Subscription
//!         ├─ Completed  ─► observer.on_complete(), inert Subscription
//!         └─ Errored(e) ─► observer.on_error(&e),  inert Subscription
//! ```
//!
//! ## Features
//! | Area              | Description                                                     | Key types / traits                                  |
//! |-------------------|-----------------------------------------------------------------|-----------------------------------------------------|
//! | **Broadcasting**  | Multicast values, terminal notifications, status inspection.    | [`Broadcaster`], [`Source`], [`Status`]             |
//! | **Policies**      | Choose what late observers get replayed.                        | [`NoReplay`], [`Latest`], [`Replay`], [`BufferPolicy`] |
//! | **Configuration** | Replay capacity, age window and time source.                    | [`ReplayConfig`], [`Clock`], [`ManualClock`]        |
//! | **Observers**     | Handlers with no-op defaults, closures, assembled callbacks.    | [`Observer`], [`ObserverFn`], [`observer()`]        |
//! | **Subscriptions** | Idempotent cancellation, drop guards, composite sets.           | [`Subscription`], [`SubscriptionGuard`], [`SubscriptionSet`] |
//! | **Errors**        | Typed errors for configuration and fallible emission.           | [`BroadcastError`]                                  |
//!
//! ## Optional features
//! - `logging`: exports a `tracing`-backed `LogObserver` _(demo/reference only)_.
//! - `stream`: exposes `Broadcaster::stream()` as a `futures::Stream` over a tokio channel.
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use replaycast::{observer, LatestBroadcaster};
//!
//! // A latest-value broadcaster always has a value.
//! let status = LatestBroadcaster::<&str, String>::with_latest("idle");
//! status.next("recording");
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let (values, done) = (Rc::clone(&log), Rc::clone(&log));
//!
//! // Joins late: gets "recording" replayed, then live values.
//! let sub = status.subscribe(
//!     observer()
//!         .with_next(move |s: &&str| values.borrow_mut().push(s.to_string()))
//!         .with_complete(move || done.borrow_mut().push("<done>".to_string())),
//! );
//!
//! status.next("processing");
//! status.complete();
//! status.next("ignored");
//!
//! assert_eq!(*log.borrow(), vec!["recording", "processing", "<done>"]);
//! assert!(sub.is_closed());
//! assert_eq!(status.value(), "processing");
//! ```
mod core;
mod error;
mod events;
mod observers;
mod policies;
mod subscriptions;

#[cfg(feature = "stream")]
mod stream;

// ---- Public re-exports ----

pub use core::{Broadcaster, LatestBroadcaster, ReplayBroadcaster, Source, Status};
pub use error::{BroadcastError, Result};
pub use events::{Notification, NotificationKind};
pub use observers::{observer, Observer, ObserverFn};
pub use policies::{
    BufferPolicy, Clock, Latest, ManualClock, NoReplay, Replay, ReplayConfig, SystemClock,
};
pub use subscriptions::{Subscription, SubscriptionGuard, SubscriptionSet};

// Optional: expose a simple built-in logging observer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogObserver;

// Optional: async bridge over a tokio channel.
// Enable with: `--features stream`
#[cfg(feature = "stream")]
pub use stream::NotificationStream;
