use crate::model::flags::Flags;
use crate::sweep::SweepOutcome;

/// Renders the per-input validation report, one line per ADC value plus
/// warning lines for every flagged violation.
pub fn render_sweep(outcome: &SweepOutcome) -> String {
    let direction = outcome.kind.expected();

    let mut out = String::new();
    for rec in &outcome.records {
        out.push_str(&format!(
            "adc_value: {}; ticks: {} (approx), {:.3} (accy); error: {:.3}%\n",
            rec.adc_value, rec.approx, rec.accurate, rec.error_pct
        ));
        if rec.flags.contains(Flags::ERROR_BOUND) {
            out.push_str(&format!(
                "WARNING: The error is greater than {}%\n",
                outcome.limit_pct
            ));
        }
        if rec.flags.contains(Flags::MONOTONICITY) {
            out.push_str(direction.warning());
            out.push('\n');
        }
    }

    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
