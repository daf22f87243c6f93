//! # Example: latest_value
//!
//! A status broadcaster that always holds a current value.
//!
//! Demonstrates how to:
//! - Seed a [`LatestBroadcaster`] so the first observer is never empty-handed.
//! - Assemble an observer from closures with [`observer()`].
//! - Hand out a read-only [`Source`](replaycast::Source) to consumers.
//!
//! ## Flow
//! ```text
//! with_latest("idle")
//!     ├─► next("recording")
//!     ├─► source.subscribe(ui)   ──► ui sees "recording" (replayed)
//!     ├─► next("processing")     ──► ui sees "processing"
//!     └─► complete()             ──► ui sees <done>
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example latest_value
//! ```

use replaycast::{observer, LatestBroadcaster};

fn main() {
    // 1. The producer owns the broadcaster
    let status = LatestBroadcaster::<&'static str, String>::with_latest("idle");
    status.next("recording");

    // 2. Consumers only get a view
    let source = status.source();
    let ui = source.subscribe(
        observer()
            .with_next(|s: &&str| println!("[ui] status = {s}"))
            .with_error(|e: &String| println!("[ui] failed: {e}"))
            .with_complete(|| println!("[ui] done")),
    );

    // 3. Live updates
    status.next("processing");
    println!("[main] current value: {}", status.value());

    // 4. Terminal
    status.complete();
    println!("[main] status: {}, ui closed: {}", status.status(), ui.is_closed());

    // 5. Late joiner still gets the last value, then completion
    source.subscribe_next(|s| println!("[late] status = {s}"));
}
