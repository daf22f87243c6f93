//! # Example: stream_bridge
//!
//! Consumes a broadcaster as a `futures::Stream` inside a current-thread runtime.
//!
//! Demonstrates how to:
//! - Turn a subscription into a [`NotificationStream`](replaycast::NotificationStream).
//! - Receive replayed items first, then live ones.
//! - See the stream end after an error.
//!
//! ## Run
//! ```bash
//! cargo run --example stream_bridge --features stream
//! ```

use futures::StreamExt;
use replaycast::{ReplayBroadcaster, ReplayConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let ticks = ReplayBroadcaster::<u64, String>::with_replay(ReplayConfig::new(2))?;
    for t in 0..4 {
        ticks.next(t);
    }

    // Replays 2 and 3 into the channel right away
    let mut stream = ticks.stream();

    ticks.next(4);
    ticks.error("upstream closed".to_string());

    while let Some(item) = stream.next().await {
        match item {
            Ok(t) => println!("[stream] tick {t}"),
            Err(e) => println!("[stream] error: {e}"),
        }
    }
    println!("[main] detached: {}", stream.is_detached());
    Ok(())
}
