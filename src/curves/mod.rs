pub mod delay;
pub mod oracle;
pub mod target;

use crate::curves::delay::{MAX_DELAY_TICKS, MIN_DELAY_TICKS};
use crate::curves::target::{MAX_TARGET_TICKS, MIN_TARGET_TICKS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CurveKind {
    Delay,
    Target,
}

impl CurveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CurveKind::Delay => "delay",
            CurveKind::Target => "target",
        }
    }

    pub fn ordered() -> &'static [CurveKind] {
        &[CurveKind::Delay, CurveKind::Target]
    }

    /// The deployable fixed-point curve.
    pub fn approx(&self, adc_value: u8) -> u16 {
        match self {
            CurveKind::Delay => delay::delay_ticks(adc_value),
            CurveKind::Target => target::target_ticks(adc_value),
        }
    }

    /// The floating-point reference the curve is validated against.
    pub fn oracle(&self, adc_value: u8) -> f64 {
        match self {
            CurveKind::Delay => oracle::delay_oracle(adc_value),
            CurveKind::Target => oracle::target_oracle(adc_value),
        }
    }

    pub fn expected(&self) -> Direction {
        match self {
            CurveKind::Delay => Direction::NonDecreasing,
            CurveKind::Target => Direction::NonIncreasing,
        }
    }

    /// Inclusive output bounds, lowest tick count first.
    pub fn range(&self) -> (u16, u16) {
        match self {
            CurveKind::Delay => (MIN_DELAY_TICKS, MAX_DELAY_TICKS),
            CurveKind::Target => (MAX_TARGET_TICKS, MIN_TARGET_TICKS),
        }
    }
}

/// Monotonic direction a curve is expected to hold across the ADC domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    NonDecreasing,
    NonIncreasing,
}

impl Direction {
    pub fn violated(&self, prev: u16, current: u16) -> bool {
        match self {
            Direction::NonDecreasing => prev > current,
            Direction::NonIncreasing => prev < current,
        }
    }

    pub fn warning(&self) -> &'static str {
        match self {
            Direction::NonDecreasing => "WARNING: The value is less than the previous",
            Direction::NonIncreasing => "WARNING: The value is greater than the previous",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/curves/mod.rs"]
mod tests;
