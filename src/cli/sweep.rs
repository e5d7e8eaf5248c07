use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use tracing::info;

use crate::curves::CurveKind;
use crate::model::thresholds::{Thresholds, load_thresholds};
use crate::report::json::{FinalSummary, write_summary};
use crate::report::text::render_sweep;
use crate::sweep::{run_sweep, write_sweep_tsv};

#[derive(Args, Debug)]
pub struct SweepArgs {
    /// Curve to validate
    #[arg(long, value_enum, default_value = "both")]
    pub(crate) curve: CurveArg,

    /// Optional output directory for per-input TSV records and the JSON summary
    #[arg(long)]
    out: Option<PathBuf>,

    /// Optional TOML file overriding the error thresholds
    #[arg(long)]
    thresholds: Option<PathBuf>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurveArg {
    Delay,
    Target,
    Both,
}

impl CurveArg {
    fn kinds(self) -> &'static [CurveKind] {
        match self {
            CurveArg::Delay => &[CurveKind::Delay],
            CurveArg::Target => &[CurveKind::Target],
            CurveArg::Both => CurveKind::ordered(),
        }
    }
}

pub fn handle(args: SweepArgs) -> anyhow::Result<()> {
    let thresholds = match &args.thresholds {
        Some(path) => load_thresholds(path)?,
        None => Thresholds::default(),
    };

    if let Some(out) = &args.out {
        std::fs::create_dir_all(out)?;
    }

    let mut summaries = Vec::new();
    for &kind in args.curve.kinds() {
        let start = Instant::now();
        info!(curve = kind.as_str(), "starting sweep");

        let outcome = run_sweep(kind, thresholds.for_curve(kind));
        print!("{}", render_sweep(&outcome));
        if let Some(out) = &args.out {
            write_sweep_tsv(out, &outcome)?;
        }

        info!(
            curve = kind.as_str(),
            elapsed_ms = start.elapsed().as_millis(),
            max_error_pct = outcome.summary.max_error_pct,
            error_violations = outcome.summary.error_violations,
            monotonicity_violations = outcome.summary.monotonicity_violations,
            "finished sweep"
        );
        summaries.push(outcome.summary);
    }

    if let Some(out) = &args.out {
        write_summary(out, &FinalSummary::new(thresholds, summaries))?;
    }
    Ok(())
}
