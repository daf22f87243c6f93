//! # Observers for broadcaster notifications.
//!
//! This module provides the [`Observer`] trait and built-in implementations.
//!
//! ## Architecture
//! ```text
//! Broadcaster::next(v) ──► snapshot ──► Observer::on_next(&v)
//!                                            │
//!                                  ┌─────────┼──────────┬─────────────┐
//!                                  ▼         ▼          ▼             ▼
//!                             Fn(&T)    ObserverFn   LogObserver   Custom
//! ```
//!
//! ## Observer types
//! - **Closures**: any `Fn(&T)` is an observer of values
//! - **Assembled**: [`ObserverFn`] with optional next/error/complete closures
//! - **Logging**: `LogObserver` (enabled via the `logging` feature)

mod observer;

#[cfg(feature = "logging")]
mod log;

pub use observer::{observer, Observer, ObserverFn};

#[cfg(feature = "logging")]
pub use log::LogObserver;
