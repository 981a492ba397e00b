//! Revenue, expenses and the three ratios derived from them.
//!
//! Zero-denominator policy: every ratio returns
//! [`MetricError::DivisionUndefined`] when its denominator is exactly zero.
//! No ratio ever silently reports `0`.

use serde::Deserialize;
use serde_json::Value as JsonValue;

use ledger_ratios_core::{Denominator, Metric, MetricError, MetricResult};

use crate::aggregate::sum_by_condition;
use crate::diagnostics::Diagnostics;
use crate::entry::{AccountCategory, LedgerEntry};

/// Account types counted as current assets.
pub const VALID_ASSET_TYPES: [&str; 3] = ["current", "bank", "current_accounts_receivable"];

/// Account types counted as current liabilities.
pub const VALID_LIABILITY_TYPES: [&str; 2] = ["current", "current_accounts_payable"];

/// Total of all `revenue` entries.
pub fn calculate_revenue(entries: &[LedgerEntry]) -> f64 {
    sum_by_condition(entries, |e| e.account_category == AccountCategory::Revenue)
}

/// Revenue over input that has not been decoded yet.
///
/// Anything that is not an array of ledger entries is reported to
/// `diagnostics` and yields `0.0`; this never fails.
pub fn calculate_revenue_untyped(value: &JsonValue, diagnostics: &dyn Diagnostics) -> f64 {
    if !value.is_array() {
        diagnostics.warn("calculate_revenue: input is not a sequence of ledger entries; revenue is 0");
        return 0.0;
    }

    match Vec::<LedgerEntry>::deserialize(value) {
        Ok(entries) => calculate_revenue(&entries),
        Err(e) => {
            diagnostics.warn(&format!(
                "calculate_revenue: input contains malformed ledger entries ({e}); revenue is 0"
            ));
            0.0
        }
    }
}

/// Total of all `expense` entries.
pub fn calculate_expenses(entries: &[LedgerEntry]) -> f64 {
    sum_by_condition(entries, |e| e.account_category == AccountCategory::Expense)
}

/// `(sales debits / revenue) * 100`.
pub fn calculate_gross_profit_margin(entries: &[LedgerEntry], revenue: f64) -> MetricResult<f64> {
    if revenue == 0.0 {
        return Err(MetricError::division_undefined(
            Metric::GrossProfitMargin,
            Denominator::Revenue,
        ));
    }

    let sales_total = sum_by_condition(entries, |e| e.account_type == "sales" && e.is_debit());
    tracing::debug!(sales_total, revenue, "gross profit margin inputs");

    Ok((sales_total / revenue) * 100.0)
}

/// `((revenue - expenses) / revenue) * 100`.
pub fn calculate_net_profit_margin(revenue: f64, expenses: f64) -> MetricResult<f64> {
    if revenue == 0.0 {
        return Err(MetricError::division_undefined(
            Metric::NetProfitMargin,
            Denominator::Revenue,
        ));
    }

    Ok(((revenue - expenses) / revenue) * 100.0)
}

/// `(current assets / current liabilities) * 100`.
///
/// Assets are debits minus credits over [`VALID_ASSET_TYPES`]; liabilities are
/// credits minus debits over [`VALID_LIABILITY_TYPES`].
pub fn calculate_working_capital_ratio(entries: &[LedgerEntry]) -> MetricResult<f64> {
    let current_asset = |e: &LedgerEntry| {
        e.account_category == AccountCategory::Assets && e.has_type_in(&VALID_ASSET_TYPES)
    };
    let current_liability = |e: &LedgerEntry| {
        e.account_category == AccountCategory::Liability && e.has_type_in(&VALID_LIABILITY_TYPES)
    };

    let asset_debits = sum_by_condition(entries, |e| current_asset(e) && e.is_debit());
    let asset_credits = sum_by_condition(entries, |e| current_asset(e) && e.is_credit());
    let assets = asset_debits - asset_credits;

    let liability_credits = sum_by_condition(entries, |e| current_liability(e) && e.is_credit());
    let liability_debits = sum_by_condition(entries, |e| current_liability(e) && e.is_debit());
    let liabilities = liability_credits - liability_debits;

    tracing::debug!(assets, liabilities, "working capital inputs");

    if liabilities == 0.0 {
        return Err(MetricError::division_undefined(
            Metric::WorkingCapitalRatio,
            Denominator::Liabilities,
        ));
    }

    Ok((assets / liabilities) * 100.0)
}
