use std::io::Write;
use std::path::Path;

use thiserror::Error;

use crate::curves::CurveKind;
use crate::model::flags::Flags;

#[derive(Debug, Error)]
pub enum SweepError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// One validated input. Recomputed on every sweep, never persisted.
#[derive(Debug, Clone)]
pub struct SweepRecord {
    pub adc_value: u8,
    pub approx: u16,
    pub accurate: f64,
    pub error_pct: f64,
    pub flags: Flags,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct SweepSummary {
    pub curve: String,
    pub inputs: usize,
    pub min_ticks: u16,
    pub max_ticks: u16,
    pub max_error_pct: f64,
    pub mean_error_pct: f64,
    pub error_violations: usize,
    pub monotonicity_violations: usize,
}

#[derive(Debug, Clone)]
pub struct SweepOutcome {
    pub kind: CurveKind,
    pub limit_pct: f64,
    pub records: Vec<SweepRecord>,
    pub summary: SweepSummary,
}

/// Sweeps the curve over the full ADC domain in ascending order, comparing
/// the fixed-point value against the oracle at every input.
pub fn run_sweep(kind: CurveKind, limit_pct: f64) -> SweepOutcome {
    let direction = kind.expected();

    let mut records = Vec::with_capacity(1 + u8::MAX as usize);
    let mut prev: Option<u16> = None;
    let mut min_ticks = u16::MAX;
    let mut max_ticks = u16::MIN;
    let mut max_error_pct = 0.0f64;
    let mut sum_error_pct = 0.0f64;
    let mut error_violations = 0usize;
    let mut monotonicity_violations = 0usize;

    for adc_value in 0..=u8::MAX {
        let approx = kind.approx(adc_value);
        let accurate = kind.oracle(adc_value);
        let error_pct = 100.0 * (accurate - approx as f64).abs() / accurate;

        let mut flags = Flags::empty();
        if error_pct > limit_pct {
            flags.set(Flags::ERROR_BOUND);
            error_violations += 1;
        }
        if let Some(prev) = prev
            && direction.violated(prev, approx)
        {
            flags.set(Flags::MONOTONICITY);
            monotonicity_violations += 1;
        }

        min_ticks = min_ticks.min(approx);
        max_ticks = max_ticks.max(approx);
        max_error_pct = max_error_pct.max(error_pct);
        sum_error_pct += error_pct;
        prev = Some(approx);

        records.push(SweepRecord {
            adc_value,
            approx,
            accurate,
            error_pct,
            flags,
        });
    }

    let summary = SweepSummary {
        curve: kind.as_str().to_string(),
        inputs: records.len(),
        min_ticks,
        max_ticks,
        max_error_pct,
        mean_error_pct: sum_error_pct / records.len() as f64,
        error_violations,
        monotonicity_violations,
    };

    SweepOutcome {
        kind,
        limit_pct,
        records,
        summary,
    }
}

pub fn write_sweep_tsv(out_dir: &Path, outcome: &SweepOutcome) -> Result<(), SweepError> {
    let path = out_dir.join(format!("{}_sweep.tsv", outcome.kind.as_str()));
    let mut writer = std::io::BufWriter::new(std::fs::File::create(&path)?);
    writer.write_all(b"adc_value\tapprox_ticks\taccurate_ticks\terror_pct\tflags\n")?;

    for rec in &outcome.records {
        let line = format!(
            "{}\t{}\t{:.3}\t{:.3}\t{}\n",
            rec.adc_value,
            rec.approx,
            rec.accurate,
            rec.error_pct,
            rec.flags.to_csv()
        );
        writer.write_all(line.as_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/sweep/mod.rs"]
mod tests;
