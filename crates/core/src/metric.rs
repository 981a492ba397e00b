//! The five reported metrics.

/// A reported metric, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Metric {
    Revenue,
    Expenses,
    GrossProfitMargin,
    NetProfitMargin,
    WorkingCapitalRatio,
}

impl Metric {
    /// All metrics in the order they are printed.
    pub const ALL: [Metric; 5] = [
        Metric::Revenue,
        Metric::Expenses,
        Metric::GrossProfitMargin,
        Metric::NetProfitMargin,
        Metric::WorkingCapitalRatio,
    ];

    /// Human-readable label, as used in report lines.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Revenue => "Revenue",
            Metric::Expenses => "Expenses",
            Metric::GrossProfitMargin => "Gross Profit Margin",
            Metric::NetProfitMargin => "Net Profit Margin",
            Metric::WorkingCapitalRatio => "Working Capital Ratio",
        }
    }

    /// Whether the metric is a percentage (as opposed to a currency amount).
    pub fn is_percentage(self) -> bool {
        !matches!(self, Metric::Revenue | Metric::Expenses)
    }
}

impl core::fmt::Display for Metric {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}
