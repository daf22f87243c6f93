#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use replaycast::{Notification, Observer};

/// Observer that records every notification it receives.
///
/// Clones share the same log, so a test keeps one handle and subscribes another.
pub struct Recorder<T, E> {
    log: Rc<RefCell<Vec<Notification<T, E>>>>,
}

impl<T, E> Clone for Recorder<T, E> {
    fn clone(&self) -> Self {
        Self {
            log: Rc::clone(&self.log),
        }
    }
}

impl<T: Clone, E: Clone> Recorder<T, E> {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn events(&self) -> Vec<Notification<T, E>> {
        self.log.borrow().clone()
    }

    pub fn values(&self) -> Vec<T> {
        self.log
            .borrow()
            .iter()
            .cloned()
            .filter_map(Notification::into_value)
            .collect()
    }

    pub fn completions(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|n| matches!(n, Notification::Complete))
            .count()
    }

    pub fn errors(&self) -> Vec<E> {
        self.log
            .borrow()
            .iter()
            .filter_map(|n| match n {
                Notification::Error(e) => Some(e.clone()),
                _ => None,
            })
            .collect()
    }
}

impl<T: Clone, E: Clone> Observer<T, E> for Recorder<T, E> {
    fn on_next(&self, value: &T) {
        self.log.borrow_mut().push(Notification::Next(value.clone()));
    }

    fn on_error(&self, error: &E) {
        self.log.borrow_mut().push(Notification::Error(error.clone()));
    }

    fn on_complete(&self) {
        self.log.borrow_mut().push(Notification::Complete);
    }
}
