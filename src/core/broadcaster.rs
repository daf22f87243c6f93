//! # Multicast broadcaster.
//!
//! [`Broadcaster`] fans each value out to every active observer,
//! synchronously and in subscription order. Its buffer policy decides what a
//! late observer gets replayed.
//!
//! ## Variants
//! ```text
//! Broadcaster<T, E>          (NoReplay)   late observer: nothing until next value
//! LatestBroadcaster<T, E>    (Latest)     late observer: the current value
//! ReplayBroadcaster<T, E>    (Replay)     late observer: up to N recent values (within window)
//! ```
//!
//! ## Delivery
//! ```text
//! next(v)
//!   ├─► (terminal? → ignore)
//!   ├─► policy.record(&v)
//!   ├─► snapshot = subscribers.clone()
//!   └─► for slot in snapshot: if slot.active → on_next(&v)    (panics deferred)
//!
//! error(e) / complete()
//!   ├─► (terminal? → ignore)
//!   ├─► terminal = Errored(e) | Completed                    (permanent)
//!   └─► for slot in take(subscribers): deactivate → on_error / on_complete
//!
//! subscribe(o)
//!   ├─► for v in policy.replay(): o.on_next(&v)
//!   └─► Active → register, live Subscription
//!       Errored(e) → o.on_error(&e), inert Subscription
//!       Completed  → o.on_complete(), inert Subscription
//! ```
//!
//! ## Rules
//! - **Snapshot isolation**: observers added during a pass do not receive
//!   the in-flight value; observers removed during a pass are skipped if
//!   not yet reached.
//! - **Depth-first reentrancy**: a `next` issued from inside a handler is
//!   fully delivered before the outer pass resumes. Ordering is call-stack
//!   order, not arrival order. Unbounded recursion is the caller's bug.
//! - **Panics**: a panicking handler does not stop the pass; after the
//!   pass the first panic is resumed on the caller of `next` / `error` /
//!   `complete`. Panics during `subscribe` replay propagate immediately
//!   and the observer is not registered.
//! - **Single-threaded**: handles are `!Send`; wrap externally for threads.

use std::fmt;
use std::rc::Rc;

use crate::core::registry::Core;
use crate::core::source::Source;
use crate::core::status::Status;
use crate::error::{BroadcastError, Result};
use crate::observers::Observer;
use crate::policies::{BufferPolicy, Clock, Latest, NoReplay, Replay, ReplayConfig, SystemClock};
use crate::subscriptions::Subscription;

/// Latest-value broadcaster: replays its single current value.
///
/// Only [`with_latest`](Broadcaster::with_latest) builds one; there is no
/// seedless constructor:
///
/// ```compile_fail
/// use replaycast::LatestBroadcaster;
///
/// let status = LatestBroadcaster::<u32, ()>::new();
/// ```
///
/// ```compile_fail
/// use replaycast::LatestBroadcaster;
///
/// let status: LatestBroadcaster<u32, ()> = Default::default();
/// ```
pub type LatestBroadcaster<T, E> = Broadcaster<T, E, Latest<T>>;

/// History-replay broadcaster: replays up to N recent values.
pub type ReplayBroadcaster<T, E, C = SystemClock> = Broadcaster<T, E, Replay<T, C>>;

/// Multicast broadcaster handle.
///
/// Cloning is cheap: clones share subscribers, terminal state and buffer.
/// The shared state lives as long as any clone or [`Source`] does.
/// A [`Subscription`] does not keep it alive: when the last handle drops,
/// registered observers are dropped too and their subscriptions close.
///
/// # Example
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use replaycast::{ReplayBroadcaster, ReplayConfig};
///
/// let history = ReplayBroadcaster::<u32, String>::with_replay(ReplayConfig::new(2)).unwrap();
/// history.next(1);
/// history.next(2);
/// history.next(3);
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// history.subscribe_next(move |v| sink.borrow_mut().push(*v));
/// history.next(4);
///
/// assert_eq!(*seen.borrow(), vec![2, 3, 4]);
/// ```
pub struct Broadcaster<T, E, P = NoReplay> {
    core: Rc<Core<T, E, P>>,
}

impl<T, E> Broadcaster<T, E, NoReplay>
where
    T: 'static,
    E: Clone + 'static,
{
    /// Creates a plain broadcaster: no replay for late observers.
    pub fn new() -> Self {
        Self::with_policy(NoReplay)
    }
}

impl<T, E> Default for Broadcaster<T, E, NoReplay>
where
    T: 'static,
    E: Clone + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Broadcaster<T, E, Latest<T>>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    /// Creates a latest-value broadcaster seeded with `seed`.
    ///
    /// The seed is mandatory: there is no constructor without one.
    pub fn with_latest(seed: T) -> Self {
        Self::with_policy(Latest::new(seed))
    }

    /// Returns the current value without subscribing.
    ///
    /// After termination this is the last value recorded before it.
    pub fn value(&self) -> T {
        self.core.with_policy(|p| p.get().clone())
    }
}

impl<T, E> Broadcaster<T, E, Replay<T, SystemClock>>
where
    T: Clone + 'static,
    E: Clone + 'static,
{
    /// Creates a history-replay broadcaster using the OS monotonic clock.
    ///
    /// Fails with [`BroadcastError::ZeroCapacity`] when `config.capacity == 0`.
    pub fn with_replay(config: ReplayConfig) -> Result<Self> {
        Ok(Self::with_policy(Replay::new(config)?))
    }
}

impl<T, E, C> Broadcaster<T, E, Replay<T, C>>
where
    T: Clone + 'static,
    E: Clone + 'static,
    C: Clock + 'static,
{
    /// Creates a history-replay broadcaster stamped by `clock`.
    pub fn with_replay_clock(config: ReplayConfig, clock: C) -> Result<Self> {
        Ok(Self::with_policy(Replay::with_clock(config, clock)?))
    }

    /// Returns the replay configuration.
    pub fn replay_config(&self) -> ReplayConfig {
        self.core.with_policy(|p| *p.config())
    }
}

impl<T, E, P> Broadcaster<T, E, P>
where
    T: 'static,
    E: Clone + 'static,
    P: BufferPolicy<T> + 'static,
{
    /// Creates a broadcaster around any buffer policy.
    pub fn with_policy(policy: P) -> Self {
        Self {
            core: Core::new(policy),
        }
    }

    /// Subscribes an observer.
    ///
    /// Replayed values are delivered before this call returns and before any
    /// live value. On a terminal stream the observer receives the replay and
    /// then the terminal notification, and the returned subscription is inert.
    pub fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<T, E> + 'static,
    {
        self.core.subscribe(observer)
    }

    /// Subscribes a value-only closure.
    ///
    /// Same as [`subscribe`](Self::subscribe) but lets the compiler infer the
    /// closure's argument type.
    pub fn subscribe_next<F>(&self, f: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        self.core.subscribe(f)
    }

    /// Emits a value to every active observer.
    ///
    /// Ignored after `error` / `complete`.
    ///
    /// # Panics
    /// Re-raises the first panic of an observer handler, after every other
    /// observer in the snapshot has been called.
    pub fn next(&self, value: T) {
        self.core.next(value);
    }

    /// Terminates the stream with `err`.
    ///
    /// `err` is delivered verbatim to current observers and to every later
    /// subscriber. Ignored if already terminal.
    ///
    /// # Panics
    /// Same policy as [`next`](Self::next).
    pub fn error(&self, err: E) {
        self.core.error(err);
    }

    /// Completes the stream. Ignored if already terminal.
    ///
    /// # Panics
    /// Same policy as [`next`](Self::next).
    pub fn complete(&self) {
        self.core.complete();
    }

    /// Like [`next`](Self::next), but reports emission on a terminal stream.
    pub fn try_next(&self, value: T) -> Result<()> {
        if self.core.next(value) {
            Ok(())
        } else {
            Err(self.terminated())
        }
    }

    /// Like [`error`](Self::error), but reports a second terminal call.
    pub fn try_error(&self, err: E) -> Result<()> {
        if self.core.error(err) {
            Ok(())
        } else {
            Err(self.terminated())
        }
    }

    /// Like [`complete`](Self::complete), but reports a second terminal call.
    pub fn try_complete(&self) -> Result<()> {
        if self.core.complete() {
            Ok(())
        } else {
            Err(self.terminated())
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> Status {
        self.core.status()
    }

    /// True after `error` or `complete`.
    pub fn is_terminated(&self) -> bool {
        self.status().is_terminal()
    }

    /// The error the stream terminated with, if any.
    pub fn thrown_error(&self) -> Option<E> {
        self.core.thrown_error()
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.core.observer_count()
    }

    /// True if at least one observer is registered.
    pub fn has_observers(&self) -> bool {
        self.observer_count() > 0
    }

    /// Values a new observer would be replayed right now, oldest first.
    pub fn buffered(&self) -> Vec<T> {
        self.core.buffered()
    }

    /// Read-only view: can subscribe, cannot emit.
    pub fn source(&self) -> Source<T, E, P> {
        Source::new(Rc::clone(&self.core))
    }

    fn terminated(&self) -> BroadcastError {
        BroadcastError::Terminated {
            status: self.status(),
        }
    }
}

impl<T, E, P> Clone for Broadcaster<T, E, P> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }
}

impl<T, E, P> fmt::Debug for Broadcaster<T, E, P>
where
    T: 'static,
    E: Clone + 'static,
    P: BufferPolicy<T> + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcaster")
            .field("status", &self.status())
            .field("observers", &self.observer_count())
            .field("retained", &self.core.with_policy(|p| p.retained()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recorder<T: Clone + 'static>() -> (Rc<RefCell<Vec<T>>>, impl Fn(&T) + 'static) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        (log, move |v: &T| sink.borrow_mut().push(v.clone()))
    }

    #[test]
    fn test_plain_delivers_in_subscription_order() {
        let b = Broadcaster::<u32, ()>::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["a", "b", "c"] {
            let o = Rc::clone(&order);
            b.subscribe_next(move |v| o.borrow_mut().push(format!("{tag}{v}")));
        }
        b.next(1);
        assert_eq!(*order.borrow(), vec!["a1", "b1", "c1"]);
    }

    #[test]
    fn test_latest_value_accessor_tracks_next() {
        let b = LatestBroadcaster::<&str, ()>::with_latest("idle");
        assert_eq!(b.value(), "idle");
        b.next("recording");
        assert_eq!(b.value(), "recording");
        b.complete();
        b.next("ignored");
        assert_eq!(b.value(), "recording");
    }

    #[test]
    fn test_latest_replays_current_value() {
        let b = LatestBroadcaster::<u32, ()>::with_latest(0);
        b.next(5);
        let (log, obs) = recorder();
        b.subscribe_next(obs);
        b.next(6);
        assert_eq!(*log.borrow(), vec![5, 6]);
    }

    #[test]
    fn test_replay_zero_capacity_rejected() {
        let err = ReplayBroadcaster::<u32, ()>::with_replay(ReplayConfig::new(0)).unwrap_err();
        assert_eq!(err, BroadcastError::ZeroCapacity);
    }

    #[test]
    fn test_try_next_reports_termination() {
        let b = Broadcaster::<u32, String>::new();
        assert!(b.try_next(1).is_ok());
        b.error("down".into());
        assert_eq!(
            b.try_next(2),
            Err(BroadcastError::Terminated {
                status: Status::Errored
            })
        );
        assert!(b.try_complete().is_err());
        assert_eq!(b.thrown_error().as_deref(), Some("down"));
    }

    #[test]
    fn test_clone_shares_state() {
        let a = Broadcaster::<u32, ()>::new();
        let b = a.clone();
        let (log, obs) = recorder();
        a.subscribe_next(obs);
        b.next(9);
        assert_eq!(*log.borrow(), vec![9]);
        assert_eq!(b.observer_count(), 1);
    }

    #[test]
    fn test_buffered_reflects_policy() {
        let b = ReplayBroadcaster::<u32, ()>::with_replay(ReplayConfig::new(2)).unwrap();
        assert!(b.buffered().is_empty());
        b.next(1);
        b.next(2);
        b.next(3);
        assert_eq!(b.buffered(), vec![2, 3]);
        assert_eq!(b.replay_config().capacity, 2);
    }

    #[test]
    fn test_debug_output() {
        let b = LatestBroadcaster::<u32, ()>::with_latest(1);
        let text = format!("{b:?}");
        assert!(text.contains("Active"));
        assert!(text.contains("retained: 1"));
    }
}
