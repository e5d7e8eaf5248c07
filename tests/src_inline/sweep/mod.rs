
use super::*;
use crate::model::thresholds::Thresholds;
use tempfile::tempdir;

#[test]
fn covers_the_full_domain_in_order() {
    let outcome = run_sweep(CurveKind::Delay, 1.0);
    assert_eq!(outcome.records.len(), 256);
    for (idx, rec) in outcome.records.iter().enumerate() {
        assert_eq!(rec.adc_value as usize, idx);
    }
}

#[test]
fn baseline_is_clean_for_both_curves() {
    let thresholds = Thresholds::default();
    for &kind in CurveKind::ordered() {
        let outcome = run_sweep(kind, thresholds.for_curve(kind));
        assert_eq!(outcome.summary.error_violations, 0, "{}", kind.as_str());
        assert_eq!(
            outcome.summary.monotonicity_violations,
            0,
            "{}",
            kind.as_str()
        );
        assert!(outcome.records.iter().all(|rec| rec.flags.is_empty()));
    }
}

#[test]
fn summary_tick_ranges() {
    let delay = run_sweep(CurveKind::Delay, 1.0).summary;
    assert_eq!(delay.curve, "delay");
    assert_eq!(delay.inputs, 256);
    assert_eq!((delay.min_ticks, delay.max_ticks), (100, 1000));

    let target = run_sweep(CurveKind::Target, 15.0).summary;
    assert_eq!(target.curve, "target");
    assert_eq!((target.min_ticks, target.max_ticks), (11, 1000));
}

#[test]
fn zero_limit_flags_every_inexact_input() {
    let outcome = run_sweep(CurveKind::Delay, 0.0);
    assert!(outcome.summary.error_violations > 0);
    // adc 0 is exact on both sides and stays clean even at a zero limit.
    assert!(outcome.summary.error_violations < 256);
    assert!(outcome.records[0].flags.is_empty());
    assert!(outcome.records[1].flags.contains(Flags::ERROR_BOUND));
}

#[test]
fn sweep_error_stats_are_consistent() {
    let outcome = run_sweep(CurveKind::Target, 15.0);
    assert!(outcome.summary.max_error_pct <= 15.0);
    assert!(outcome.summary.mean_error_pct <= outcome.summary.max_error_pct);
    for rec in &outcome.records {
        assert!(rec.error_pct <= outcome.summary.max_error_pct);
    }
}

#[test]
fn determinism_sweep_tsv() {
    let outcome = run_sweep(CurveKind::Target, 15.0);
    let dir = tempdir().expect("tempdir");
    let out1 = dir.path().join("out1");
    let out2 = dir.path().join("out2");
    std::fs::create_dir_all(&out1).expect("mkdir");
    std::fs::create_dir_all(&out2).expect("mkdir");
    write_sweep_tsv(&out1, &outcome).expect("write1");
    write_sweep_tsv(&out2, &outcome).expect("write2");
    let a = std::fs::read(out1.join("target_sweep.tsv")).expect("read1");
    let b = std::fs::read(out2.join("target_sweep.tsv")).expect("read2");
    assert_eq!(a, b);
}

#[test]
fn tsv_layout() {
    let outcome = run_sweep(CurveKind::Delay, 1.0);
    let dir = tempdir().expect("tempdir");
    write_sweep_tsv(dir.path(), &outcome).expect("write");

    let text = std::fs::read_to_string(dir.path().join("delay_sweep.tsv")).expect("read");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("adc_value\tapprox_ticks\taccurate_ticks\terror_pct\tflags")
    );
    assert_eq!(lines.next(), Some("0\t100\t100.000\t0.000\t."));
    assert_eq!(text.lines().count(), 257);
}
