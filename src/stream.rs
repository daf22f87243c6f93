//! # Async bridge.
//!
//! [`NotificationStream`] turns a subscription into a
//! [`futures::Stream`] of `Result<T, E>`, fed through an unbounded
//! [`tokio::sync::mpsc`] channel.
//!
//! ## Architecture
//! ```text
//! Broadcaster::next(v) ──► Forward::on_next ──► tx.send(Ok(v))  ──► rx ──► poll_next
//! Broadcaster::error(e) ─► Forward::on_error ─► tx.send(Err(e)), drop tx
//! Broadcaster::complete() ► Forward::on_complete ─► drop tx     ──► stream ends
//! ```
//!
//! ## Rules
//! - Replay happens when the stream is created; replayed items are queued first.
//! - The channel only buffers; delivery on the producer side stays synchronous.
//! - The stream ends after yielding the error, or at completion.
//! - It also ends once every broadcaster handle and source is dropped: the
//!   core owns the sender, and the stream only holds a weak link to it.
//! - Dropping the stream unsubscribes.
//! - The stream is `!Send` (it holds the subscription); poll it on the
//!   producer's thread, e.g. in a current-thread runtime or a `LocalSet`.
//!
//! ## Example
//! ```rust
//! use futures::StreamExt;
//! use replaycast::LatestBroadcaster;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let temps = LatestBroadcaster::<i32, String>::with_latest(20);
//! let mut stream = temps.stream();
//! temps.next(21);
//! temps.complete();
//!
//! let got: Vec<_> = stream.by_ref().collect().await;
//! assert_eq!(got, vec![Ok(20), Ok(21)]);
//! # }
//! ```

use std::cell::RefCell;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::Stream;
use tokio::sync::mpsc;

use crate::core::Broadcaster;
use crate::observers::Observer;
use crate::policies::BufferPolicy;
use crate::subscriptions::SubscriptionGuard;

type Sender<T, E> = mpsc::UnboundedSender<Result<T, E>>;

/// Observer forwarding notifications into the channel.
struct Forward<T, E> {
    tx: RefCell<Option<Sender<T, E>>>,
}

impl<T: Clone, E: Clone> Observer<T, E> for Forward<T, E> {
    fn on_next(&self, value: &T) {
        if let Some(tx) = self.tx.borrow().as_ref() {
            let _ = tx.send(Ok(value.clone()));
        }
    }

    fn on_error(&self, error: &E) {
        if let Some(tx) = self.tx.borrow_mut().take() {
            let _ = tx.send(Err(error.clone()));
        }
    }

    fn on_complete(&self) {
        self.tx.borrow_mut().take();
    }
}

/// `Stream` of a broadcaster's notifications.
pub struct NotificationStream<T, E> {
    rx: mpsc::UnboundedReceiver<Result<T, E>>,
    guard: SubscriptionGuard,
}

impl<T, E> NotificationStream<T, E> {
    /// True once the underlying subscription no longer receives values.
    ///
    /// Items already queued are still yielded.
    pub fn is_detached(&self) -> bool {
        self.guard.subscription().map_or(true, |s| s.is_closed())
    }
}

impl<T, E> Unpin for NotificationStream<T, E> {}

impl<T, E> Stream for NotificationStream<T, E> {
    type Item = Result<T, E>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.rx.poll_recv(cx)
    }
}

impl<T, E, P> Broadcaster<T, E, P>
where
    T: Clone + 'static,
    E: Clone + 'static,
    P: BufferPolicy<T> + 'static,
{
    /// Subscribes a channel-backed [`NotificationStream`].
    pub fn stream(&self) -> NotificationStream<T, E> {
        let (tx, rx) = mpsc::unbounded_channel();
        let forward = Forward {
            tx: RefCell::new(Some(tx)),
        };
        let guard = self.subscribe(forward).guard();
        NotificationStream { rx, guard }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ReplayBroadcaster, ReplayConfig};
    use futures::StreamExt;

    #[tokio::test]
    async fn test_stream_yields_replay_then_live() {
        let b = ReplayBroadcaster::<u32, String>::with_replay(ReplayConfig::new(2)).unwrap();
        b.next(1);
        b.next(2);
        b.next(3);

        let mut stream = b.stream();
        b.next(4);
        b.complete();

        let got: Vec<_> = stream.by_ref().collect().await;
        assert_eq!(got, vec![Ok(2), Ok(3), Ok(4)]);
        assert!(stream.is_detached());
    }

    #[tokio::test]
    async fn test_stream_ends_after_error() {
        let b = Broadcaster::<u32, String>::new();
        let mut stream = b.stream();
        b.next(7);
        b.error("lost".into());
        b.next(8);

        assert_eq!(stream.next().await, Some(Ok(7)));
        assert_eq!(stream.next().await, Some(Err("lost".to_string())));
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn test_stream_ends_when_producer_dropped() {
        let b = Broadcaster::<u32, ()>::new();
        let mut stream = b.stream();
        b.next(1);
        drop(b);

        assert_eq!(stream.next().await, Some(Ok(1)));
        assert_eq!(stream.next().await, None);
        assert!(stream.is_detached());
    }

    #[tokio::test]
    async fn test_stream_outlives_producer_while_source_is_held() {
        let b = Broadcaster::<u32, ()>::new();
        let view = b.source();
        let mut stream = b.stream();
        b.next(1);
        drop(b);

        assert_eq!(stream.next().await, Some(Ok(1)));
        assert!(!stream.is_detached());
        drop(view);
        assert_eq!(stream.next().await, None);
    }

    #[tokio::test]
    async fn test_dropping_stream_unsubscribes() {
        let b = Broadcaster::<u32, ()>::new();
        let stream = b.stream();
        assert_eq!(b.observer_count(), 1);
        drop(stream);
        assert_eq!(b.observer_count(), 0);
    }
}
