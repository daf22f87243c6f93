use std::fmt;
use std::rc::Rc;

use crate::subscriptions::SubscriptionGuard;

/// Type-erased link from a subscription back to its broadcaster.
pub(crate) trait Teardown {
    /// Subscriber id, unique per broadcaster.
    fn id(&self) -> u64;
    /// Detaches the subscriber. Must be idempotent.
    fn unsubscribe(&self);
    /// True once unsubscribed or after terminal delivery.
    fn is_closed(&self) -> bool;
}

/// Handle returned by `subscribe`.
///
/// Cloning the handle is cheap; all clones control the same subscriber.
#[derive(Clone)]
pub struct Subscription {
    link: Option<Rc<dyn Teardown>>,
}

impl Subscription {
    pub(crate) fn live(link: Rc<dyn Teardown>) -> Self {
        Self { link: Some(link) }
    }

    /// Inert subscription (returned for subscribers of a terminal stream).
    pub(crate) fn closed() -> Self {
        Self { link: None }
    }

    /// Stops delivery to this subscriber.
    ///
    /// Idempotent. When called from inside a delivery pass, the current pass
    /// skips this subscriber if it has not reached it yet, and every later
    /// pass excludes it. The same holds for the terminal pass: a subscriber
    /// unsubscribed by an earlier observer's `on_error` / `on_complete`
    /// receives no terminal notification.
    pub fn unsubscribe(&self) {
        if let Some(link) = &self.link {
            link.unsubscribe();
        }
    }

    /// True if no further notifications will reach this subscriber.
    pub fn is_closed(&self) -> bool {
        self.link.as_ref().map_or(true, |l| l.is_closed())
    }

    /// Subscriber id, or `None` for an inert subscription.
    pub fn id(&self) -> Option<u64> {
        self.link.as_ref().map(|l| l.id())
    }

    /// Converts into a guard that unsubscribes on drop.
    #[must_use = "dropping the guard immediately unsubscribes"]
    pub fn guard(self) -> SubscriptionGuard {
        SubscriptionGuard::new(self)
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id())
            .field("closed", &self.is_closed())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inert_subscription() {
        let sub = Subscription::closed();
        assert!(sub.is_closed());
        assert_eq!(sub.id(), None);
        sub.unsubscribe();
        sub.unsubscribe();
        assert!(sub.is_closed());
    }
}
