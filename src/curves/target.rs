pub const MIN_TARGET_TICKS: u16 = 1000; // 10s
pub const MID_TARGET_TICKS: u16 = 100; // 1s
pub const MAX_TARGET_TICKS: u16 = 10; // 100ms

/// Breakpoints of the piecewise-linear half-curve. The last entry only
/// bounds the top segment and is never an active breakpoint itself.
pub const REF_POINTS: [u8; 10] = [0, 6, 12, 20, 28, 39, 51, 67, 89, 128];

const SEGMENTS: u16 = 9;

/// Calculates the pulse target (in ticks) for the given ADC value.
///
/// Approximates `10^(3 - adc_value/128)` with two mirrored piecewise-linear
/// halves over [0, 128). Each half spans nine equal tick steps (1000→100
/// and 100→10), so the step values divide evenly and the interpolation
/// needs nothing beyond truncating integer division.
pub fn target_ticks(adc_value: u8) -> u16 {
    let (mut rest, mut ticks, step) = if adc_value >= 0x80 {
        (
            adc_value - 0x80,
            MID_TARGET_TICKS,
            (MID_TARGET_TICKS - MAX_TARGET_TICKS) / SEGMENTS,
        )
    } else {
        (
            adc_value,
            MIN_TARGET_TICKS,
            (MIN_TARGET_TICKS - MID_TARGET_TICKS) / SEGMENTS,
        )
    };

    // Highest matching breakpoint wins; index 0 always matches.
    for i in (0..SEGMENTS as usize).rev() {
        if rest >= REF_POINTS[i] {
            rest -= REF_POINTS[i];
            ticks -= i as u16 * step;
            if rest != 0 {
                ticks -= step * rest as u16 / (REF_POINTS[i + 1] - REF_POINTS[i]) as u16;
            }
            break;
        }
    }

    ticks
}

#[cfg(test)]
#[path = "../../tests/src_inline/curves/target.rs"]
mod tests;
