//! Floating-point reference curves. Validation tooling only; the deployed
//! relay build never calls into this module.

use crate::curves::delay::{MAX_DELAY_TICKS, MIN_DELAY_TICKS};

/// Exact delay curve: linear from `MIN_DELAY_TICKS` to `MAX_DELAY_TICKS`.
pub fn delay_oracle(adc_value: u8) -> f64 {
    MIN_DELAY_TICKS as f64
        + (adc_value as f64 / u8::MAX as f64) * (MAX_DELAY_TICKS - MIN_DELAY_TICKS) as f64
}

/// Exact target curve: one decade of ticks per half-domain.
pub fn target_oracle(adc_value: u8) -> f64 {
    10f64.powf(3.0 - adc_value as f64 / 128.0)
}
