pub const MIN_DELAY_TICKS: u16 = 100; // 1s
pub const MAX_DELAY_TICKS: u16 = 1000; // 10s

const SPAN: u32 = (MAX_DELAY_TICKS - MIN_DELAY_TICKS) as u32;

// Reciprocal of the curve slope in 8.8 fixed point. An 8.0 divisor truncates
// to 72 and overshoots MAX_DELAY_TICKS at the top of the domain.
const DIVISOR: u32 = ((u8::MAX as u32) << 16) / SPAN;

/// Calculates the startup delay (in ticks) for the given ADC value.
///
/// Runs on integer arithmetic only:
///
/// ```text
/// delay_ticks = MIN + (adc_value / UINT8_MAX) * (MAX - MIN)
///             = MIN + (k * adc_value) / ((k * UINT8_MAX) / (MAX - MIN))
/// ```
///
/// with `k = 1 << 16`, so the precomputed divisor keeps eight fractional
/// bits and the single truncating division stays within one tick of the
/// exact curve over the whole domain.
pub fn delay_ticks(adc_value: u8) -> u16 {
    let scaled = (adc_value as u32) << 16;
    MIN_DELAY_TICKS + (scaled / DIVISOR) as u16
}

#[cfg(test)]
#[path = "../../tests/src_inline/curves/delay.rs"]
mod tests;
