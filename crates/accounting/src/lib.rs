//! Accounting ratios over a flat list of ledger entries.
//!
//! Pure domain logic only: no file I/O, no console output. Warnings go through
//! an injected [`Diagnostics`] sink.

pub mod aggregate;
pub mod diagnostics;
pub mod entry;
pub mod format;
pub mod metrics;
pub mod report;

pub use aggregate::sum_by_condition;
pub use diagnostics::{CollectedDiagnostics, Diagnostics, TracingDiagnostics};
pub use entry::{AccountCategory, LedgerEntry, ValueType};
pub use format::{format_currency, format_percentage};
pub use metrics::{
    calculate_expenses, calculate_gross_profit_margin, calculate_net_profit_margin,
    calculate_revenue, calculate_revenue_untyped, calculate_working_capital_ratio,
    VALID_ASSET_TYPES, VALID_LIABILITY_TYPES,
};
pub use report::FinancialReport;

pub use ledger_ratios_core::{Denominator, Metric, MetricError, MetricResult};
