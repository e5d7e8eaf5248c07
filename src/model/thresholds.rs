use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::curves::CurveKind;

#[derive(Debug, Error)]
pub enum ThresholdError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Relative error limits per curve, in percent of the reference value.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_delay_error_pct")]
    pub delay_error_pct: f64,
    #[serde(default = "default_target_error_pct")]
    pub target_error_pct: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            delay_error_pct: default_delay_error_pct(),
            target_error_pct: default_target_error_pct(),
        }
    }
}

impl Thresholds {
    pub fn for_curve(&self, kind: CurveKind) -> f64 {
        match kind {
            CurveKind::Delay => self.delay_error_pct,
            CurveKind::Target => self.target_error_pct,
        }
    }
}

fn default_delay_error_pct() -> f64 {
    1.0
}

fn default_target_error_pct() -> f64 {
    15.0
}

pub fn load_thresholds(path: &Path) -> Result<Thresholds, ThresholdError> {
    let text = std::fs::read_to_string(path)?;
    let parsed: Thresholds = toml::from_str(&text)?;
    Ok(parsed)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/thresholds.rs"]
mod tests;
