//! Filter-and-sum helper shared by every metric.

use crate::entry::LedgerEntry;

/// Sum `total_value` over the entries matching `predicate`.
///
/// No matches yields `0.0`. Non-finite values (NaN, ±∞) contribute nothing.
pub fn sum_by_condition<P>(entries: &[LedgerEntry], predicate: P) -> f64
where
    P: Fn(&LedgerEntry) -> bool,
{
    entries
        .iter()
        .filter(|entry| predicate(entry))
        .map(|entry| finite_or_zero(entry.total_value))
        .sum()
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
