//! Timer-driven counter animator.
//!
//! `CounterAnimator` is a cheap, cloneable factory holding the tick period, the
//! tick cap, and the shared counters. Each `start` spawns one tokio task that
//! drives a fresh `AnimationRun` and returns the `RunHandle` that owns it.

mod handle;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::time::Duration;

use casedash_core::error::Result;
use casedash_core::metric::Targets;

use crate::config::AnimatorSection;
use crate::obs::metrics::AnimatorMetrics;

pub use handle::RunHandle;

#[derive(Clone)]
pub struct CounterAnimator {
    inner: Arc<AnimatorInner>,
}

struct AnimatorInner {
    period: Duration,
    cap: Option<u32>,
    metrics: Arc<AnimatorMetrics>,
    next_run_id: AtomicU64,
}

impl CounterAnimator {
    pub fn new(section: &AnimatorSection) -> Self {
        Self::with_metrics(section, Arc::new(AnimatorMetrics::default()))
    }

    pub fn with_metrics(section: &AnimatorSection, metrics: Arc<AnimatorMetrics>) -> Self {
        Self {
            inner: Arc::new(AnimatorInner {
                period: Duration::from_millis(section.tick_interval_ms),
                cap: section.tick_cap,
                metrics,
                next_run_id: AtomicU64::new(1),
            }),
        }
    }

    pub fn period(&self) -> Duration {
        self.inner.period
    }

    pub fn cap(&self) -> Option<u32> {
        self.inner.cap
    }

    pub fn metrics(&self) -> Arc<AnimatorMetrics> {
        Arc::clone(&self.inner.metrics)
    }

    /// Start a run toward `targets`. Must be called inside a tokio runtime.
    pub fn start(&self, targets: &Targets) -> Result<RunHandle> {
        RunHandle::spawn(self.clone(), targets)
    }

    /// Validate signed targets, then start. Negative values fail with
    /// `InvalidTarget` and nothing is spawned.
    pub fn start_pairs<I, K>(&self, pairs: I) -> Result<RunHandle>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let targets = Targets::from_pairs(pairs)?;
        self.start(&targets)
    }

    fn next_run_id(&self) -> u64 {
        self.inner.next_run_id.fetch_add(1, Ordering::Relaxed)
    }
}
