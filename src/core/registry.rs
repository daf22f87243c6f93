//! # Shared broadcaster state.
//!
//! [`Core`] owns the subscriber sequence, the terminal state, and the buffer
//! policy. Every [`Broadcaster`](crate::Broadcaster) clone and every
//! [`Source`](crate::Source) holds an `Rc` to it. A [`Subscription`] only
//! holds `Weak` references, so once the last handle is gone the core drops
//! and takes every registered observer with it.
//!
//! ## Architecture
//! ```text
//! Broadcaster ──┐
//! Source     ───┴──► Rc<Core> ──► subscribers: RefCell<Vec<Rc<Slot>>>
//!                      ▲         terminal:    RefCell<Terminal<E>>
//! Link(sub) ── Weak ───┘         policy:      RefCell<P>
//!     └────── Weak ──► Slot
//! ```
//!
//! ## Rules
//! - No `RefCell` borrow is held while an observer handler runs; every
//!   delivery pass works on a cloned snapshot of the sequence.
//! - `Slot::active` is the single source of truth for "may this observer
//!   still be called"; it flips to false exactly once.
//! - Removal from the sequence is eager (unsubscribe and terminal delivery).
//! - Dropping the core drops every registered observer without a terminal
//!   notification; their subscriptions read as closed.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::core::dispatch::Panics;
use crate::core::status::{Status, Terminal};
use crate::observers::Observer;
use crate::policies::BufferPolicy;
use crate::subscriptions::{Subscription, Teardown};

/// One registered observer.
pub(crate) struct Slot<T, E> {
    id: u64,
    active: Cell<bool>,
    observer: Box<dyn Observer<T, E>>,
}

impl<T, E> Slot<T, E> {
    #[inline]
    fn is_active(&self) -> bool {
        self.active.get()
    }

    /// Flips the slot inactive; returns whether it was active before.
    #[inline]
    fn deactivate(&self) -> bool {
        self.active.replace(false)
    }
}

/// Shared state behind every broadcaster handle.
pub(crate) struct Core<T, E, P> {
    subscribers: RefCell<Vec<Rc<Slot<T, E>>>>,
    terminal: RefCell<Terminal<E>>,
    policy: RefCell<P>,
    next_id: Cell<u64>,
}

impl<T, E, P> Core<T, E, P>
where
    T: 'static,
    E: Clone + 'static,
    P: BufferPolicy<T> + 'static,
{
    pub(crate) fn new(policy: P) -> Rc<Self> {
        Rc::new(Self {
            subscribers: RefCell::new(Vec::new()),
            terminal: RefCell::new(Terminal::Active),
            policy: RefCell::new(policy),
            next_id: Cell::new(0),
        })
    }

    pub(crate) fn status(&self) -> Status {
        self.terminal.borrow().status()
    }

    pub(crate) fn thrown_error(&self) -> Option<E> {
        match &*self.terminal.borrow() {
            Terminal::Errored(err) => Some(err.clone()),
            _ => None,
        }
    }

    pub(crate) fn observer_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub(crate) fn buffered(&self) -> Vec<T> {
        self.policy.borrow_mut().replay()
    }

    pub(crate) fn with_policy<R>(&self, f: impl FnOnce(&P) -> R) -> R {
        f(&self.policy.borrow())
    }

    /// Replays history to `observer`, then registers it or hands it the
    /// terminal notification.
    ///
    /// Panics raised by `observer` during replay propagate unchanged; the
    /// observer is then never registered.
    pub(crate) fn subscribe<O>(self: &Rc<Self>, observer: O) -> Subscription
    where
        O: Observer<T, E> + 'static,
    {
        let history = self.policy.borrow_mut().replay();
        for value in &history {
            observer.on_next(value);
        }

        let terminal = self.terminal.borrow().clone();
        match terminal {
            Terminal::Errored(err) => {
                tracing::trace!(replayed = history.len(), "late subscriber on errored stream");
                observer.on_error(&err);
                Subscription::closed()
            }
            Terminal::Completed => {
                tracing::trace!(replayed = history.len(), "late subscriber on completed stream");
                observer.on_complete();
                Subscription::closed()
            }
            Terminal::Active => {
                let id = self.next_id.get();
                self.next_id.set(id + 1);

                let slot = Rc::new(Slot {
                    id,
                    active: Cell::new(true),
                    observer: Box::new(observer),
                });
                let total = {
                    let mut subs = self.subscribers.borrow_mut();
                    subs.push(Rc::clone(&slot));
                    subs.len()
                };
                tracing::trace!(subscriber = id, replayed = history.len(), total, "subscribed");

                Subscription::live(Rc::new(Link {
                    id,
                    core: Rc::downgrade(self),
                    slot: Rc::downgrade(&slot),
                }))
            }
        }
    }

    /// Records and delivers one value. Returns false when terminal.
    pub(crate) fn next(&self, value: T) -> bool {
        if self.status().is_terminal() {
            tracing::trace!("next after termination ignored");
            return false;
        }
        self.policy.borrow_mut().record(&value);

        let snapshot = self.snapshot();
        tracing::trace!(observers = snapshot.len(), "dispatch next");

        let mut panics = Panics::default();
        for slot in &snapshot {
            if slot.is_active() {
                panics.catch(slot.id, || slot.observer.on_next(&value));
            }
        }
        panics.resume();
        true
    }

    pub(crate) fn error(&self, err: E) -> bool {
        self.terminate(Terminal::Errored(err.clone()), |obs| obs.on_error(&err))
    }

    pub(crate) fn complete(&self) -> bool {
        self.terminate(Terminal::Completed, |obs| obs.on_complete())
    }

    fn terminate<F>(&self, terminal: Terminal<E>, deliver: F) -> bool
    where
        F: Fn(&dyn Observer<T, E>),
    {
        {
            let mut state = self.terminal.borrow_mut();
            if state.status().is_terminal() {
                tracing::trace!(status = %state.status(), "terminal call on terminated stream ignored");
                return false;
            }
            *state = terminal;
        }

        let snapshot = std::mem::take(&mut *self.subscribers.borrow_mut());
        tracing::debug!(
            status = %self.status(),
            observers = snapshot.len(),
            "broadcaster terminated"
        );

        let mut panics = Panics::default();
        for slot in &snapshot {
            if slot.deactivate() {
                panics.catch(slot.id, || deliver(slot.observer.as_ref()));
            }
        }
        panics.resume();
        true
    }

    fn snapshot(&self) -> Vec<Rc<Slot<T, E>>> {
        self.subscribers.borrow().clone()
    }

    fn remove(&self, id: u64) {
        let mut subs = self.subscribers.borrow_mut();
        subs.retain(|s| s.id != id);
        tracing::trace!(subscriber = id, remaining = subs.len(), "unsubscribed");
    }
}

/// Back-reference from a [`Subscription`] to its slot.
///
/// Both references are weak: the slot is owned by the core's sequence (and
/// by in-flight snapshots), the core by the broadcaster handles.
struct Link<T, E, P> {
    id: u64,
    core: Weak<Core<T, E, P>>,
    slot: Weak<Slot<T, E>>,
}

impl<T, E, P> Teardown for Link<T, E, P>
where
    T: 'static,
    E: Clone + 'static,
    P: BufferPolicy<T> + 'static,
{
    fn id(&self) -> u64 {
        self.id
    }

    fn unsubscribe(&self) {
        let Some(slot) = self.slot.upgrade() else {
            return;
        };
        if slot.deactivate() {
            if let Some(core) = self.core.upgrade() {
                core.remove(self.id);
            }
        }
    }

    fn is_closed(&self) -> bool {
        self.slot.upgrade().map_or(true, |slot| !slot.is_active())
    }
}
