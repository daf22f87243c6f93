//! # Example: replay_window
//!
//! A replay broadcaster bounded by count and age, observed through the
//! built-in `LogObserver`.
//!
//! Demonstrates how to:
//! - Configure [`ReplayConfig`] with a capacity and a window.
//! - Drive time deterministically with [`ManualClock`].
//! - Print notifications via `tracing` with [`LogObserver`].
//!
//! ## Flow
//! ```text
//! with_replay_clock(capacity=3, window=1s)
//!     ├─► next(1..=5) spaced 300ms
//!     ├─► subscribe(LogObserver)  ──► replays entries younger than 1s, at most 3
//!     ├─► advance(2s)
//!     └─► subscribe(LogObserver)  ──► nothing left to replay
//! ```
//!
//! ## Run
//! ```bash
//! RUST_LOG=trace cargo run --example replay_window --features logging
//! ```

use std::time::Duration;

use replaycast::{LogObserver, ManualClock, ReplayBroadcaster, ReplayConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // 1. Capacity 3, entries older than one second are dropped
    let cfg = ReplayConfig::new(3).with_window(Duration::from_secs(1));
    let clock = ManualClock::new();
    let readings =
        ReplayBroadcaster::<u32, String, ManualClock>::with_replay_clock(cfg, clock.clone())?;

    // 2. Emit five readings, 300ms apart
    for v in 1..=5 {
        readings.next(v);
        clock.advance(Duration::from_millis(300));
    }
    println!("[main] retained: {:?}", readings.buffered());

    // 3. A late subscriber gets the retained tail
    let first = readings.subscribe(LogObserver::new("first"));

    // 4. Everything ages out
    clock.advance(Duration::from_secs(2));
    let _second = readings.subscribe(LogObserver::new("second"));
    println!("[main] retained after 2s: {:?}", readings.buffered());

    // 5. A zero capacity is rejected
    if let Err(err) = ReplayBroadcaster::<u32, String>::with_replay(ReplayConfig::new(0)) {
        println!("[main] rejected: {} ({})", err, err.as_label());
    }

    readings.error("sensor offline".to_string());
    println!("[main] first closed: {}", first.is_closed());
    Ok(())
}
