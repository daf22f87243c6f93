//! Property tests for replay retention and late-subscriber delivery.

mod common;

use std::time::Duration;

use common::Recorder;
use proptest::prelude::*;
use replaycast::{BufferPolicy, ManualClock, Replay, ReplayBroadcaster, ReplayConfig};

proptest! {
    /// A late subscriber is replayed exactly the last `min(n, capacity)` values, in order.
    #[test]
    fn late_subscriber_gets_tail(values in prop::collection::vec(any::<i32>(), 0..64), capacity in 1usize..16) {
        let b = ReplayBroadcaster::<i32, ()>::with_replay(ReplayConfig::new(capacity)).unwrap();
        for v in &values {
            b.next(*v);
        }

        let rec = Recorder::new();
        b.subscribe(rec.clone());

        let skip = values.len().saturating_sub(capacity);
        prop_assert_eq!(rec.values(), values[skip..].to_vec());
    }

    /// Retention never exceeds capacity, whatever the emission pattern.
    #[test]
    fn retained_never_exceeds_capacity(count in 0usize..200, capacity in 1usize..32) {
        let mut policy = Replay::new(ReplayConfig::new(capacity)).unwrap();
        for v in 0..count {
            policy.record(&v);
            prop_assert!(policy.retained() <= capacity);
        }
        prop_assert_eq!(policy.retained(), count.min(capacity));
    }

    /// With a window, only entries no older than the window survive a read.
    #[test]
    fn window_keeps_only_fresh_entries(
        gaps in prop::collection::vec(0u64..300, 1..40),
        window_ms in 1u64..1_000,
    ) {
        let clock = ManualClock::new();
        let cfg = ReplayConfig::new(usize::MAX).with_window(Duration::from_millis(window_ms));
        let mut policy = Replay::with_clock(cfg, clock.clone()).unwrap();

        let mut stamps = Vec::with_capacity(gaps.len());
        for (i, gap) in gaps.iter().enumerate() {
            clock.advance(Duration::from_millis(*gap));
            stamps.push(clock.elapsed());
            policy.record(&i);
        }

        let now = clock.elapsed();
        let expected: Vec<usize> = stamps
            .iter()
            .enumerate()
            .filter(|(_, at)| now - **at <= Duration::from_millis(window_ms))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(policy.replay(), expected);
    }
}
