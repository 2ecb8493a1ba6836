//! Metric and target model.
//!
//! Targets arrive as signed integers (config, callers) and are validated once
//! into non-negative values, so a `Metric` can never be asked to count toward a
//! negative number.

use std::collections::BTreeMap;

use crate::error::{CaseDashError, Result};

/// A named counter's state: `0 <= current <= target` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    current: u64,
    target: u64,
}

impl Metric {
    pub fn new(target: u64) -> Self {
        Self { current: 0, target }
    }

    pub fn current(&self) -> u64 {
        self.current
    }

    pub fn target(&self) -> u64 {
        self.target
    }

    /// `current` has reached `target`; further steps are no-ops.
    pub fn is_clamped(&self) -> bool {
        self.current >= self.target
    }

    /// Advance by one, clamped at the target.
    pub fn step(&mut self) {
        self.current = self.current.saturating_add(1).min(self.target);
    }
}

/// Validated mapping of metric name to target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Targets {
    inner: BTreeMap<String, u64>,
}

impl Targets {
    /// Build from signed pairs. Any negative value is rejected with
    /// `InvalidTarget` rather than coerced. A repeated name keeps the last value.
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        let mut inner = BTreeMap::new();
        for (name, value) in pairs {
            let name = name.into();
            let target = u64::try_from(value).map_err(|_| CaseDashError::InvalidTarget {
                name: name.clone(),
                value: value.to_string(),
            })?;
            inner.insert(name, target);
        }
        Ok(Self { inner })
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.inner.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Fresh metrics, all at zero.
    pub(crate) fn to_metrics(&self) -> BTreeMap<String, Metric> {
        self.inner
            .iter()
            .map(|(k, v)| (k.clone(), Metric::new(*v)))
            .collect()
    }
}
