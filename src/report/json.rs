use std::path::Path;

use serde::Serialize;

use crate::model::thresholds::Thresholds;
use crate::sweep::SweepSummary;

#[derive(Debug, Clone, Serialize)]
pub struct FinalSummary {
    pub tool: ToolSummary,
    pub thresholds: Thresholds,
    pub sweeps: Vec<SweepSummary>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSummary {
    pub name: String,
    pub version: String,
}

impl FinalSummary {
    pub fn new(thresholds: Thresholds, sweeps: Vec<SweepSummary>) -> Self {
        Self {
            tool: ToolSummary {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            thresholds,
            sweeps,
        }
    }
}

pub fn write_summary(out_dir: &Path, summary: &FinalSummary) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    let path = out_dir.join("summary.json");
    std::fs::write(path, json)?;
    Ok(())
}
