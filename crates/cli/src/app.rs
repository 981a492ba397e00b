use std::io::Write;

use anyhow::Context;

use ledger_ratios_accounting::FinancialReport;

use crate::config::{Config, OutputFormat};
use crate::loader::load_ledger;

/// Load the configured ledger, compute the report and write it to `out`.
pub fn run(config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let entries = load_ledger(&config.data)?;
    let report = FinancialReport::calculate(&entries)?;

    match config.output {
        OutputFormat::Text => writeln!(out, "{report}").context("failed to write report")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &report).context("failed to write report")?;
            writeln!(out).context("failed to write report")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    use ledger_ratios_observability::LogFormat;

    fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    fn config(name: &str, output: OutputFormat) -> Config {
        Config {
            data: fixture(name),
            output,
            log_format: LogFormat::Pretty,
        }
    }

    #[test]
    fn writes_text_report() {
        let mut out = Vec::new();
        run(&config("data.json", OutputFormat::Text), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Revenue: $1,500\n\
             Expenses: $300\n\
             Gross Profit Margin: 66.7%\n\
             Net Profit Margin: 80.0%\n\
             Working Capital Ratio: 187.5%\n"
        );
    }

    #[test]
    fn writes_json_report() {
        let mut out = Vec::new();
        run(&config("data.json", OutputFormat::Json), &mut out).unwrap();

        let report: FinancialReport = serde_json::from_slice(&out).unwrap();
        assert_eq!(report.revenue, 1500.0);
        assert_eq!(report.expenses, 300.0);
        assert_eq!(report.working_capital_ratio, 187.5);
    }

    #[test]
    fn undefined_ratio_is_an_error() {
        let mut out = Vec::new();
        let err = run(&config("zero_revenue.json", OutputFormat::Text), &mut out).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Gross Profit Margin calculation is undefined: revenue is zero."
        );
        assert!(out.is_empty());
    }
}
