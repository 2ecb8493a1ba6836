//! casedash core: runtime-free primitives for the dashboard counters.
//!
//! This crate defines the metric/target model, the clock-free animation state
//! machine, the case-record model with its badge mapping, and the error surface
//! shared by the surface runtime. It carries no timer or runtime dependencies so
//! every transition can be driven and inspected synchronously.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Invalid input surfaces as `CaseDashError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod animation;
pub mod error;
pub mod metric;
pub mod record;

/// Shared result type.
pub use error::{CaseDashError, Result};
