//! # Panic isolation for a delivery pass.
//!
//! One panicking observer must not starve the rest of a snapshot. Each
//! handler call runs under `catch_unwind`; the pass keeps going, and once it
//! is over the first captured panic is resumed on the producer's stack.
//!
//! ```text
//! for slot in snapshot:
//!     catch_unwind(slot.on_*) ──► Err(payload) → warn!, keep first payload
//! resume_unwind(first payload)                  (if any)
//! ```
//!
//! **Warning**: `AssertUnwindSafe` is used, so an observer that panics while
//! holding a `RefCell` borrow leaves its own state as the panic left it.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Collects observer panics across one delivery pass.
#[derive(Default)]
pub(crate) struct Panics {
    first: Option<Box<dyn Any + Send>>,
    count: usize,
}

impl Panics {
    /// Runs one handler, capturing its panic if any.
    pub(crate) fn catch<F: FnOnce()>(&mut self, subscriber: u64, f: F) {
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) {
            tracing::warn!(
                subscriber,
                panic = %panic_message(payload.as_ref()),
                "observer panicked during delivery"
            );
            self.count += 1;
            if self.first.is_none() {
                self.first = Some(payload);
            }
        }
    }

    /// Re-raises the first captured panic, if any.
    pub(crate) fn resume(self) {
        if let Some(payload) = self.first {
            if self.count > 1 {
                tracing::warn!(
                    panicked = self.count,
                    "multiple observers panicked; resuming the first"
                );
            }
            panic::resume_unwind(payload);
        }
    }
}

fn panic_message(any: &(dyn Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
