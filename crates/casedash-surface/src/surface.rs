//! Text display surface.
//!
//! Owns the stat-card targets and the static record list, holds at most one
//! animation run at a time, and renders whatever that run currently reports.
//! Mounting again cancels the previous run first; unmounting (or dropping the
//! surface) releases it.

use casedash_core::animation::Snapshot;
use casedash_core::error::Result;
use casedash_core::record::{Badge, CaseRecord};

use crate::animator::{CounterAnimator, RunHandle};
use crate::config::DashboardConfig;

pub struct DisplaySurface {
    cfg: DashboardConfig,
    animator: CounterAnimator,
    run: Option<RunHandle>,
}

impl DisplaySurface {
    pub fn new(cfg: DashboardConfig) -> Self {
        let animator = CounterAnimator::new(&cfg.animator);
        Self::with_animator(cfg, animator)
    }

    pub fn with_animator(cfg: DashboardConfig, animator: CounterAnimator) -> Self {
        Self {
            cfg,
            animator,
            run: None,
        }
    }

    pub fn cfg(&self) -> &DashboardConfig {
        &self.cfg
    }

    pub fn animator(&self) -> &CounterAnimator {
        &self.animator
    }

    pub fn run(&self) -> Option<&RunHandle> {
        self.run.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.run.is_some()
    }

    /// Start animating the stat cards. A run left over from an earlier mount is
    /// cancelled before the new one begins.
    pub fn mount(&mut self) -> Result<&RunHandle> {
        let targets = self.cfg.targets()?;
        if let Some(prev) = self.run.take() {
            tracing::debug!(run_id = prev.id(), "remount: cancelling previous run");
            prev.stop();
        }
        let run = self.animator.start(&targets)?;
        tracing::debug!(run_id = run.id(), cards = self.cfg.stats.len(), "surface mounted");
        Ok(self.run.insert(run))
    }

    pub fn unmount(&mut self) {
        if let Some(run) = self.run.take() {
            run.stop();
            tracing::debug!(run_id = run.id(), "surface unmounted");
        }
    }

    /// One line per stat card, in config order.
    pub fn render_stats(&self, snap: &Snapshot) -> Vec<String> {
        self.cfg
            .stats
            .iter()
            .map(|card| {
                let value = snap.value(&card.key).unwrap_or(0);
                let icon = card.icon.as_deref().map(|i| format!("{i} ")).unwrap_or_default();
                format!("{icon}{:<16} {:>4}  [{}]", card.label, value, card.tone.as_str())
            })
            .collect()
    }

    /// Complaint table: a header line, then one line per record.
    pub fn render_records(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.cfg.records.len() + 1);
        out.push(format!(
            "{:<8} {:<12} {:<10}  {:<30} {:<8} {}",
            "ID", "TYPE", "DATE", "STATUS", "IPC", "PRIORITY"
        ));
        out.extend(self.cfg.records.iter().map(render_record));
        out
    }
}

impl Drop for DisplaySurface {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn render_record(r: &CaseRecord) -> String {
    format!(
        "{:<8} {:<12} {:<10}  {:<30} {:<8} {}",
        r.id,
        r.kind.as_str(),
        r.date,
        badge_text(r.status.badge(), r.status.as_str()),
        r.ipc,
        badge_text(r.priority.badge(), r.priority.as_str()),
    )
}

pub fn badge_text(badge: Badge, label: &str) -> String {
    match badge.marker {
        Some(marker) => format!("[{}] {} {}", badge.tone.as_str(), marker, label),
        None => format!("[{}] {}", badge.tone.as_str(), label),
    }
}
