//! Broadcaster core: registration, dispatch and lifecycle.
//!
//! The public API from this module is [`Broadcaster`] (with its
//! [`LatestBroadcaster`] / [`ReplayBroadcaster`] aliases), the read-only
//! [`Source`] view, and [`Status`].
//!
//! Internal modules:
//! - [`registry`]: shared state, subscriber sequence, snapshot delivery;
//! - [`dispatch`]: panic isolation for a delivery pass;
//! - [`broadcaster`]: producer-facing handle;
//! - [`source`]: consumer-facing handle;
//! - [`status`]: terminal state.

mod broadcaster;
mod dispatch;
mod registry;
mod source;
mod status;

pub use broadcaster::{Broadcaster, LatestBroadcaster, ReplayBroadcaster};
pub use source::Source;
pub use status::Status;
