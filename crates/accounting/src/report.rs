use serde::{Deserialize, Serialize};

use ledger_ratios_core::{Metric, MetricResult};

use crate::entry::LedgerEntry;
use crate::format::{format_currency, format_percentage};
use crate::metrics::{
    calculate_expenses, calculate_gross_profit_margin, calculate_net_profit_margin,
    calculate_revenue, calculate_working_capital_ratio,
};

/// The five headline figures for one ledger.
///
/// Margins and the working capital ratio are percentages (`65.5` means 65.5%).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialReport {
    pub revenue: f64,
    pub expenses: f64,
    pub gross_profit_margin: f64,
    pub net_profit_margin: f64,
    pub working_capital_ratio: f64,
}

impl FinancialReport {
    /// Compute every metric, failing on the first undefined ratio.
    pub fn calculate(entries: &[LedgerEntry]) -> MetricResult<Self> {
        let revenue = calculate_revenue(entries);
        let expenses = calculate_expenses(entries);
        let gross_profit_margin = calculate_gross_profit_margin(entries, revenue)?;
        let net_profit_margin = calculate_net_profit_margin(revenue, expenses)?;
        let working_capital_ratio = calculate_working_capital_ratio(entries)?;

        tracing::debug!(entries = entries.len(), "financial report calculated");

        Ok(Self {
            revenue,
            expenses,
            gross_profit_margin,
            net_profit_margin,
            working_capital_ratio,
        })
    }

    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.revenue,
            Metric::Expenses => self.expenses,
            Metric::GrossProfitMargin => self.gross_profit_margin,
            Metric::NetProfitMargin => self.net_profit_margin,
            Metric::WorkingCapitalRatio => self.working_capital_ratio,
        }
    }

    /// One `"<Label>: <formatted value>"` line per metric, in display order.
    pub fn lines(&self) -> Vec<String> {
        Metric::ALL
            .iter()
            .map(|&metric| {
                let value = self.value(metric);
                let text = if metric.is_percentage() {
                    format_percentage(value)
                } else {
                    format_currency(value)
                };
                format!("{}: {}", metric.label(), text)
            })
            .collect()
    }
}

impl core::fmt::Display for FinancialReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
