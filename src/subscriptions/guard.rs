use crate::subscriptions::Subscription;

/// Unsubscribes the wrapped [`Subscription`] when dropped.
///
/// ```rust
/// use replaycast::Broadcaster;
///
/// let b = Broadcaster::<u8, ()>::new();
/// {
///     let _guard = b.subscribe_next(|_v| {}).guard();
///     assert_eq!(b.observer_count(), 1);
/// }
/// assert_eq!(b.observer_count(), 0);
/// ```
#[derive(Debug)]
pub struct SubscriptionGuard {
    inner: Option<Subscription>,
}

impl SubscriptionGuard {
    pub(crate) fn new(inner: Subscription) -> Self {
        Self { inner: Some(inner) }
    }

    /// Returns the subscription without unsubscribing it.
    pub fn disarm(mut self) -> Subscription {
        self.inner.take().unwrap_or_else(Subscription::closed)
    }

    /// Borrows the guarded subscription.
    pub fn subscription(&self) -> Option<&Subscription> {
        self.inner.as_ref()
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        if let Some(sub) = self.inner.take() {
            sub.unsubscribe();
        }
    }
}
