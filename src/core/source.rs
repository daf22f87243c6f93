use std::fmt;
use std::rc::Rc;

use crate::core::registry::Core;
use crate::core::status::Status;
use crate::observers::Observer;
use crate::policies::BufferPolicy;
use crate::subscriptions::Subscription;

/// Subscribe-only view of a [`Broadcaster`](crate::Broadcaster).
///
/// Hand this to consumers that must not emit. It shares the broadcaster's
/// state and keeps it alive.
///
/// ```rust
/// use replaycast::LatestBroadcaster;
///
/// let state = LatestBroadcaster::<&str, ()>::with_latest("idle");
/// let view = state.source();
///
/// let sub = view.subscribe_next(|s| println!("state={s}"));
/// state.next("busy");
/// assert_eq!(view.observer_count(), 1);
/// sub.unsubscribe();
/// ```
pub struct Source<T, E, P> {
    core: Rc<Core<T, E, P>>,
}

impl<T, E, P> Source<T, E, P>
where
    T: 'static,
    E: Clone + 'static,
    P: BufferPolicy<T> + 'static,
{
    pub(crate) fn new(core: Rc<Core<T, E, P>>) -> Self {
        Self { core }
    }

    /// See [`Broadcaster::subscribe`](crate::Broadcaster::subscribe).
    pub fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<T, E> + 'static,
    {
        self.core.subscribe(observer)
    }

    /// See [`Broadcaster::subscribe_next`](crate::Broadcaster::subscribe_next).
    pub fn subscribe_next<F>(&self, f: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        self.core.subscribe(f)
    }

    /// Current lifecycle status.
    pub fn status(&self) -> Status {
        self.core.status()
    }

    /// True after the producer called `error` or `complete`.
    pub fn is_terminated(&self) -> bool {
        self.status().is_terminal()
    }

    /// Number of registered observers.
    pub fn observer_count(&self) -> usize {
        self.core.observer_count()
    }
}

impl<T, E, P> Clone for Source<T, E, P> {
    fn clone(&self) -> Self {
        Self {
            core: Rc::clone(&self.core),
        }
    }
}

impl<T, E, P> fmt::Debug for Source<T, E, P>
where
    T: 'static,
    E: Clone + 'static,
    P: BufferPolicy<T> + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source")
            .field("status", &self.status())
            .field("observers", &self.observer_count())
            .finish()
    }
}
