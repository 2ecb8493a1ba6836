use std::collections::HashSet;

use serde::Deserialize;

use casedash_core::animation::DEFAULT_TICK_CAP;
use casedash_core::error::{CaseDashError, Result};
use casedash_core::metric::Targets;
use casedash_core::record::{sample_records, CaseRecord, Tone};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    pub version: u32,

    #[serde(default)]
    pub animator: AnimatorSection,

    #[serde(default = "default_stats")]
    pub stats: Vec<StatCard>,

    #[serde(default = "sample_records")]
    pub records: Vec<CaseRecord>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            version: 1,
            animator: AnimatorSection::default(),
            stats: default_stats(),
            records: sample_records(),
        }
    }
}

impl DashboardConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(CaseDashError::UnsupportedVersion);
        }

        self.animator.validate()?;

        let mut seen = HashSet::new();
        for card in &self.stats {
            if card.key.trim().is_empty() {
                return Err(CaseDashError::BadRequest("stats[].key must not be empty".into()));
            }
            if !seen.insert(card.key.as_str()) {
                return Err(CaseDashError::BadRequest(format!(
                    "stats[].key must be unique (duplicate: {})",
                    card.key
                )));
            }
        }

        let mut ids = HashSet::new();
        for r in &self.records {
            if !ids.insert(r.id.as_str()) {
                return Err(CaseDashError::BadRequest(format!(
                    "records[].id must be unique (duplicate: {})",
                    r.id
                )));
            }
        }

        // Negative or non-integer targets fail here with InvalidTarget.
        self.targets()?;
        Ok(())
    }

    /// Targets for the counter animator, one per stat card. Negative and
    /// non-integer values both fail with `InvalidTarget`.
    pub fn targets(&self) -> Result<Targets> {
        let pairs = self
            .stats
            .iter()
            .map(|c| Ok((c.key.clone(), c.target.as_integer(&c.key)?)))
            .collect::<Result<Vec<_>>>()?;
        Targets::from_pairs(pairs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnimatorSection {
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// `null` disables the cap: the run ends once every counter is clamped.
    #[serde(default = "default_tick_cap")]
    pub tick_cap: Option<u32>,
}

impl Default for AnimatorSection {
    fn default() -> Self {
        Self {
            tick_interval_ms: default_tick_interval_ms(),
            tick_cap: default_tick_cap(),
        }
    }
}

impl AnimatorSection {
    pub fn validate(&self) -> Result<()> {
        if !(1..=10_000).contains(&self.tick_interval_ms) {
            return Err(CaseDashError::BadRequest(
                "animator.tick_interval_ms must be between 1 and 10000".into(),
            ));
        }
        if self.tick_cap == Some(0) {
            return Err(CaseDashError::BadRequest(
                "animator.tick_cap must be at least 1 (or null)".into(),
            ));
        }
        Ok(())
    }
}

fn default_tick_interval_ms() -> u64 {
    50
}
fn default_tick_cap() -> Option<u32> {
    Some(DEFAULT_TICK_CAP)
}

/// One animated statistic on the dashboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatCard {
    pub key: String,
    pub label: String,
    pub tone: Tone,
    /// Glyph printed before the label.
    #[serde(default)]
    pub icon: Option<String>,
    pub target: TargetValue,
}

/// Raw target as written in YAML.
///
/// Anything that is not an `i64` is kept as-is so validation can report it as
/// `InvalidTarget` instead of a parse error.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TargetValue {
    Integer(i64),
    Other(serde_yaml::Value),
}

impl TargetValue {
    fn as_integer(&self, name: &str) -> Result<i64> {
        match self {
            TargetValue::Integer(v) => Ok(*v),
            TargetValue::Other(v) => Err(CaseDashError::InvalidTarget {
                name: name.to_string(),
                value: render_yaml(v),
            }),
        }
    }
}

fn render_yaml(v: &serde_yaml::Value) -> String {
    serde_yaml::to_string(v)
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|_| format!("{v:?}"))
}

fn default_stats() -> Vec<StatCard> {
    let card = |key: &str, label: &str, tone, icon: &str, target| StatCard {
        key: key.into(),
        label: label.into(),
        tone,
        icon: Some(icon.into()),
        target: TargetValue::Integer(target),
    };
    vec![
        card("reports", "Total Reports", Tone::Blue, "📊", 24),
        card("pending", "Pending Review", Tone::Purple, "⏳", 8),
        card("resolved", "Resolved Cases", Tone::Green, "✅", 16),
        card("urgent", "Urgent Cases", Tone::Red, "🚨", 5),
    ]
}
