//! Dashboard config loader (strict parsing).

pub mod schema;

use std::fs;

use casedash_core::error::{CaseDashError, Result};

pub use schema::{AnimatorSection, DashboardConfig, StatCard, TargetValue};

pub fn load_from_file(path: &str) -> Result<DashboardConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| CaseDashError::Internal(format!("read config failed ({path}): {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<DashboardConfig> {
    let cfg: DashboardConfig = serde_yaml::from_str(s)
        .map_err(|e| CaseDashError::BadRequest(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
