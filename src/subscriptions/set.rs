//! # Composite subscription.
//!
//! [`SubscriptionSet`] collects subscriptions (possibly from different
//! broadcasters) and cancels them together.
//!
//! ## Rules
//! - `unsubscribe` is idempotent and closes the set permanently.
//! - Adding to a closed set unsubscribes the newcomer immediately.
//! - Already-closed members are pruned on `add`.

use crate::subscriptions::Subscription;

/// Group of subscriptions cancelled as one.
#[derive(Debug, Default)]
pub struct SubscriptionSet {
    members: Vec<Subscription>,
    closed: bool,
}

impl SubscriptionSet {
    /// Creates an empty, open set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a subscription to the set.
    pub fn add(&mut self, sub: Subscription) {
        if self.closed {
            sub.unsubscribe();
            return;
        }
        self.members.retain(|m| !m.is_closed());
        self.members.push(sub);
    }

    /// Unsubscribes every member and closes the set.
    pub fn unsubscribe(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        for sub in self.members.drain(..) {
            sub.unsubscribe();
        }
    }

    /// True after [`SubscriptionSet::unsubscribe`].
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Number of members that are still live.
    pub fn len(&self) -> usize {
        self.members.iter().filter(|m| !m.is_closed()).count()
    }

    /// True if no member is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Extend<Subscription> for SubscriptionSet {
    fn extend<I: IntoIterator<Item = Subscription>>(&mut self, iter: I) {
        for sub in iter {
            self.add(sub);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Broadcaster;

    #[test]
    fn test_unsubscribe_all() {
        let a = Broadcaster::<u8, ()>::new();
        let b = Broadcaster::<u8, ()>::new();

        let mut set = SubscriptionSet::new();
        set.add(a.subscribe_next(|_v| {}));
        set.add(b.subscribe_next(|_v| {}));
        assert_eq!(set.len(), 2);

        set.unsubscribe();
        set.unsubscribe();
        assert!(set.is_closed());
        assert!(set.is_empty());
        assert_eq!(a.observer_count(), 0);
        assert_eq!(b.observer_count(), 0);
    }

    #[test]
    fn test_add_after_close_unsubscribes_immediately() {
        let a = Broadcaster::<u8, ()>::new();
        let mut set = SubscriptionSet::new();
        set.unsubscribe();

        let late = a.subscribe_next(|_v| {});
        set.add(late.clone());
        assert!(late.is_closed());
        assert_eq!(a.observer_count(), 0);
    }

    #[test]
    fn test_closed_members_are_pruned() {
        let a = Broadcaster::<u8, ()>::new();
        let mut set = SubscriptionSet::new();
        set.add(a.subscribe_next(|_v| {}));
        a.complete();
        set.add(a.subscribe_next(|_v| {}));
        assert!(set.is_empty());
    }
}
