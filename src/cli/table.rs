use clap::Args;

use crate::curves::CurveKind;

#[derive(Args, Debug)]
pub struct TableArgs {
    /// Curve to print
    #[arg(long, value_enum)]
    pub(crate) curve: TableCurveArg,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableCurveArg {
    Delay,
    Target,
}

impl From<TableCurveArg> for CurveKind {
    fn from(value: TableCurveArg) -> Self {
        match value {
            TableCurveArg::Delay => CurveKind::Delay,
            TableCurveArg::Target => CurveKind::Target,
        }
    }
}

/// Prints the full adc_value → ticks table for one curve, the form the
/// firmware integration consumes when spot-checking the deployed constants.
pub fn handle(args: TableArgs) -> anyhow::Result<()> {
    let kind: CurveKind = args.curve.into();

    let mut out = String::new();
    out.push_str("adc_value\tticks\n");
    for adc_value in 0..=u8::MAX {
        out.push_str(&format!("{}\t{}\n", adc_value, kind.approx(adc_value)));
    }
    print!("{}", out);
    Ok(())
}
