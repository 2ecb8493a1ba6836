//! Clock-free animation run.
//!
//! `AnimationRun` advances every metric together, one step per `tick()`. It
//! knows nothing about time: the surface runtime decides when a tick happens.
//!
//! Lifecycle:
//! - `Idle -> Running` on `begin()`
//! - `Running -> Completed` once the tick cap is hit or every metric is clamped
//! - `Running -> Cancelled` on `cancel()`
//!
//! Terminal phases never change again; a new run is a new `AnimationRun`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::metric::{Metric, Targets};

/// Tick cap used by the stock dashboard.
pub const DEFAULT_TICK_CAP: u32 = 25;

/// Run lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Idle,
    Running,
    Completed,
    Cancelled,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Completed | Phase::Cancelled)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::Completed => "completed",
            Phase::Cancelled => "cancelled",
        }
    }
}

/// Read-only view of a run, emitted after every tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub tick: u32,
    pub phase: Phase,
    pub values: BTreeMap<String, u64>,
}

impl Snapshot {
    pub fn value(&self, name: &str) -> Option<u64> {
        self.values.get(name).copied()
    }
}

#[derive(Debug, Clone)]
pub struct AnimationRun {
    metrics: BTreeMap<String, Metric>,
    ticks: u32,
    /// `None` runs until every metric is clamped.
    cap: Option<u32>,
    phase: Phase,
}

impl AnimationRun {
    pub fn new(targets: &Targets, cap: Option<u32>) -> Self {
        Self {
            metrics: targets.to_metrics(),
            ticks: 0,
            cap,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn cap(&self) -> Option<u32> {
        self.cap
    }

    pub fn metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.get(name)
    }

    /// Number of ticks this run will perform if nobody cancels it.
    pub fn planned_ticks(&self) -> u32 {
        let longest = self
            .metrics
            .values()
            .map(|m| u32::try_from(m.target()).unwrap_or(u32::MAX))
            .max()
            .unwrap_or(0);
        match self.cap {
            Some(cap) => longest.min(cap),
            None => longest,
        }
    }

    /// `Idle -> Running`. A run with nothing to do goes straight to
    /// `Completed`. Returns the phase after the call.
    pub fn begin(&mut self) -> Phase {
        if self.phase == Phase::Idle {
            self.phase = if self.is_done() {
                Phase::Completed
            } else {
                Phase::Running
            };
        }
        self.phase
    }

    /// Apply one tick. Returns `None` unless the run is `Running`.
    pub fn tick(&mut self) -> Option<Snapshot> {
        if self.phase != Phase::Running {
            return None;
        }
        for m in self.metrics.values_mut() {
            m.step();
        }
        self.ticks = self.ticks.saturating_add(1);
        if self.is_done() {
            self.phase = Phase::Completed;
            tracing::trace!(ticks = self.ticks, "animation run completed");
        }
        Some(self.snapshot())
    }

    /// `Running`/`Idle -> Cancelled`. Returns whether the phase changed.
    pub fn cancel(&mut self) -> bool {
        if self.phase.is_terminal() {
            return false;
        }
        self.phase = Phase::Cancelled;
        true
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.ticks,
            phase: self.phase,
            values: self
                .metrics
                .iter()
                .map(|(k, m)| (k.clone(), m.current()))
                .collect(),
        }
    }

    fn is_done(&self) -> bool {
        let capped = self.cap.is_some_and(|cap| self.ticks >= cap);
        capped || self.metrics.values().all(Metric::is_clamped)
    }
}
