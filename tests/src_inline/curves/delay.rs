
use super::*;
use crate::curves::oracle::delay_oracle;

#[test]
fn boundaries_are_exact() {
    assert_eq!(delay_ticks(0), MIN_DELAY_TICKS);
    assert_eq!(delay_ticks(u8::MAX), MAX_DELAY_TICKS);
}

#[test]
fn known_values() {
    assert_eq!(delay_ticks(1), 103);
    assert_eq!(delay_ticks(15), 152);
    assert_eq!(delay_ticks(64), 325);
    assert_eq!(delay_ticks(128), 551);
    assert_eq!(delay_ticks(254), 996);
}

#[test]
fn stays_within_range() {
    for adc_value in 0..=u8::MAX {
        let ticks = delay_ticks(adc_value);
        assert!(ticks >= MIN_DELAY_TICKS, "adc {}: {}", adc_value, ticks);
        assert!(ticks <= MAX_DELAY_TICKS, "adc {}: {}", adc_value, ticks);
    }
}

#[test]
fn non_decreasing_over_domain() {
    for adc_value in 1..=u8::MAX {
        assert!(
            delay_ticks(adc_value - 1) <= delay_ticks(adc_value),
            "decrease at adc {}",
            adc_value
        );
    }
}

#[test]
fn error_under_one_percent_everywhere() {
    for adc_value in 0..=u8::MAX {
        let approx = delay_ticks(adc_value) as f64;
        let accurate = delay_oracle(adc_value);
        let error_pct = 100.0 * (accurate - approx).abs() / accurate;
        assert!(error_pct < 1.0, "adc {}: {:.3}%", adc_value, error_pct);
    }
}

#[test]
fn deterministic() {
    for adc_value in 0..=u8::MAX {
        assert_eq!(delay_ticks(adc_value), delay_ticks(adc_value));
    }
}
