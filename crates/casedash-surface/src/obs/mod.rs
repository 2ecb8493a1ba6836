//! Lightweight in-process counters (dependency-free).
//!
//! Counters are plain atomics shared by every run an animator starts, rendered
//! in Prometheus text format on demand.

pub mod metrics;
