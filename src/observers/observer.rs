//! # Observer: the capability set a subscriber provides.
//!
//! [`Observer`] has three handlers, all with no-op defaults, so an
//! implementation only overrides what it cares about.
//!
//! Three ways to build one:
//! - implement the trait on your own type;
//! - pass any `Fn(&T)` closure (values only, terminal notifications ignored);
//! - assemble optional closures with [`observer()`] / [`ObserverFn`].
//!
//! ## Rules
//! - Handlers run synchronously on the producer's call stack.
//! - Handlers take `&self`: a handler may re-enter the same broadcaster
//!   (`next`, `subscribe`, `unsubscribe`), which can deliver to this observer
//!   again before the outer call returns. Use `Cell`/`RefCell` for state and
//!   keep borrows short.
//! - A panicking handler does not starve other observers; see
//!   [`Broadcaster::next`](crate::Broadcaster::next).
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use replaycast::{Broadcaster, Observer};
//!
//! struct Sum(Rc<Cell<i64>>);
//!
//! impl Observer<i64, String> for Sum {
//!     fn on_next(&self, value: &i64) {
//!         self.0.set(self.0.get() + value);
//!     }
//! }
//!
//! let total = Rc::new(Cell::new(0));
//! let numbers = Broadcaster::<i64, String>::new();
//! numbers.subscribe(Sum(Rc::clone(&total)));
//! numbers.next(2);
//! numbers.next(40);
//! assert_eq!(total.get(), 42);
//! ```

use std::fmt;

/// Receiver of broadcaster notifications.
pub trait Observer<T, E> {
    /// Called for each value, replayed or live.
    fn on_next(&self, value: &T) {
        let _ = value;
    }

    /// Called at most once, when the stream fails. Nothing follows it.
    fn on_error(&self, error: &E) {
        let _ = error;
    }

    /// Called at most once, when the stream completes. Nothing follows it.
    fn on_complete(&self) {}
}

impl<T, E, F> Observer<T, E> for F
where
    F: Fn(&T),
{
    fn on_next(&self, value: &T) {
        self(value)
    }
}

type NextFn<T> = Box<dyn Fn(&T)>;
type ErrorFn<E> = Box<dyn Fn(&E)>;
type CompleteFn = Box<dyn Fn()>;

/// Observer assembled from optional closures.
///
/// Missing handlers behave as no-ops.
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use replaycast::{observer, Broadcaster};
///
/// let log = Rc::new(RefCell::new(Vec::new()));
/// let (on_next, on_done) = (Rc::clone(&log), Rc::clone(&log));
///
/// let b = Broadcaster::<u8, ()>::new();
/// b.subscribe(
///     observer()
///         .with_next(move |v: &u8| on_next.borrow_mut().push(v.to_string()))
///         .with_complete(move || on_done.borrow_mut().push("done".into())),
/// );
/// b.next(1);
/// b.complete();
/// assert_eq!(*log.borrow(), vec!["1".to_string(), "done".to_string()]);
/// ```
pub struct ObserverFn<T, E> {
    next: Option<NextFn<T>>,
    error: Option<ErrorFn<E>>,
    complete: Option<CompleteFn>,
}

/// Starts an [`ObserverFn`] with no handlers.
pub fn observer<T, E>() -> ObserverFn<T, E> {
    ObserverFn::new()
}

impl<T, E> ObserverFn<T, E> {
    /// Creates an observer with no handlers.
    pub fn new() -> Self {
        Self {
            next: None,
            error: None,
            complete: None,
        }
    }

    /// Sets the value handler.
    pub fn with_next(mut self, f: impl Fn(&T) + 'static) -> Self {
        self.next = Some(Box::new(f));
        self
    }

    /// Sets the error handler.
    pub fn with_error(mut self, f: impl Fn(&E) + 'static) -> Self {
        self.error = Some(Box::new(f));
        self
    }

    /// Sets the completion handler.
    pub fn with_complete(mut self, f: impl Fn() + 'static) -> Self {
        self.complete = Some(Box::new(f));
        self
    }
}

impl<T, E> Default for ObserverFn<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> Observer<T, E> for ObserverFn<T, E> {
    fn on_next(&self, value: &T) {
        if let Some(f) = &self.next {
            f(value);
        }
    }

    fn on_error(&self, error: &E) {
        if let Some(f) = &self.error {
            f(error);
        }
    }

    fn on_complete(&self) {
        if let Some(f) = &self.complete {
            f();
        }
    }
}

impl<T, E> fmt::Debug for ObserverFn<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverFn")
            .field("next", &self.next.is_some())
            .field("error", &self.error.is_some())
            .field("complete", &self.complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_closure_ignores_terminal_notifications() {
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let obs = move |v: &u32| h.set(h.get() + *v);

        Observer::<u32, ()>::on_next(&obs, &5);
        Observer::<u32, ()>::on_error(&obs, &());
        Observer::<u32, ()>::on_complete(&obs);
        assert_eq!(hits.get(), 5);
    }

    #[test]
    fn test_missing_handlers_are_noops() {
        let obs: ObserverFn<u32, String> = observer();
        obs.on_next(&1);
        obs.on_error(&"x".to_string());
        obs.on_complete();
    }

    #[test]
    fn test_error_handler_receives_value_verbatim() {
        let seen = Rc::new(Cell::new(0));
        let s = Rc::clone(&seen);
        let obs: ObserverFn<(), i32> = observer().with_error(move |e: &i32| s.set(*e));
        obs.on_error(&-17);
        assert_eq!(seen.get(), -17);
    }
}
