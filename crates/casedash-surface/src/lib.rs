//! casedash surface library entry.
//!
//! This crate wires the strict config loader, the timer-driven counter
//! animator, and the text display surface that consumes it. It is consumed by
//! the binary (`main.rs`) and by integration tests.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod animator;
pub mod config;
pub mod obs;
pub mod surface;
