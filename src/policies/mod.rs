//! Buffer policies.
//!
//! A policy decides **what** a broadcaster retains from past `next` calls and
//! **what** a newly joining observer is replayed before live delivery starts.
//!
//! ## Contents
//! - [`BufferPolicy`] the strategy trait the broadcaster core drives
//! - [`NoReplay`]     retains nothing (plain event broadcaster)
//! - [`Latest`]       retains exactly one value, seeded at construction
//! - [`Replay`]       retains up to N timestamped values, optionally age-bounded
//! - [`ReplayConfig`] capacity/window knobs for [`Replay`]
//! - [`Clock`]        time source for replay windows ([`SystemClock`], [`ManualClock`])
//!
//! ## Quick wiring
//! ```text
//! Broadcaster::next(v)      ──► policy.record(&v) ──► dispatch to snapshot
//! Broadcaster::subscribe(o) ──► policy.replay()   ──► o.on_next(..) for each ──► register
//! ```
//!
//! Buffer contents only ever come from `record`; the `Latest` seed is the
//! single exception.

mod clock;
mod config;
mod latest;
mod none;
mod replay;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::ReplayConfig;
pub use latest::Latest;
pub use none::NoReplay;
pub use replay::Replay;

/// Retention strategy plugged into a [`Broadcaster`](crate::Broadcaster).
///
/// The policy is exclusively owned by the broadcaster; it is never borrowed
/// while an observer callback runs, so implementations need no reentrancy care.
pub trait BufferPolicy<T> {
    /// Records a value passed to `next`, applying the eviction rule.
    fn record(&mut self, value: &T);

    /// Returns the values to replay to a new observer, oldest first.
    ///
    /// Takes `&mut self` so that age-based policies can evict stale entries
    /// before answering.
    fn replay(&mut self) -> Vec<T>;

    /// Number of values currently retained (without read-side eviction).
    fn retained(&self) -> usize;
}
