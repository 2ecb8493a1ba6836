//! Run/tick counters for the counter animator.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Default)]
pub struct Counter(AtomicU64);

impl Counter {
    pub fn inc(&self) {
        self.0.fetch_add(1, Ordering::Relaxed);
    }

    pub fn get(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        let _ = writeln!(out, "{} {}", name, self.get());
    }
}

#[derive(Default)]
pub struct AnimatorMetrics {
    pub runs_started: Counter,
    pub runs_completed: Counter,
    pub runs_cancelled: Counter,
    pub ticks: Counter,
}

impl AnimatorMetrics {
    /// Runs started but neither completed nor cancelled yet.
    pub fn runs_active(&self) -> u64 {
        let ended = self.runs_completed.get() + self.runs_cancelled.get();
        self.runs_started.get().saturating_sub(ended)
    }

    /// Render all counters in Prometheus text exposition format.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.runs_started.render("casedash_runs_started_total", &mut out);
        self.runs_completed.render("casedash_runs_completed_total", &mut out);
        self.runs_cancelled.render("casedash_runs_cancelled_total", &mut out);
        self.ticks.render("casedash_ticks_total", &mut out);
        let _ = writeln!(out, "# TYPE casedash_runs_active gauge");
        let _ = writeln!(out, "casedash_runs_active {}", self.runs_active());
        out
    }
}
