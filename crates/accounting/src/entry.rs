use serde::{Deserialize, Serialize};

use ledger_ratios_core::ValueObject;

/// High-level account category.
///
/// The vocabulary is open: anything other than the four known categories
/// decodes as [`AccountCategory::Other`] and is ignored by every metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    Revenue,
    Expense,
    Assets,
    Liability,
    #[serde(other)]
    Other,
}

/// Direction of an entry's effect on its account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Debit,
    Credit,
    #[serde(other)]
    Other,
}

/// One row of the general ledger (immutable).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub account_category: AccountCategory,
    /// Sub-classification, e.g. "sales", "current", "bank".
    pub account_type: String,
    pub value_type: ValueType,
    /// Signed magnitude of the entry.
    pub total_value: f64,
}

impl ValueObject for LedgerEntry {}

impl LedgerEntry {
    pub fn new(
        account_category: AccountCategory,
        account_type: impl Into<String>,
        value_type: ValueType,
        total_value: f64,
    ) -> Self {
        Self {
            account_category,
            account_type: account_type.into(),
            value_type,
            total_value,
        }
    }

    pub fn is_debit(&self) -> bool {
        self.value_type == ValueType::Debit
    }

    pub fn is_credit(&self) -> bool {
        self.value_type == ValueType::Credit
    }

    /// True when the account type is one of `types`.
    pub fn has_type_in(&self, types: &[&str]) -> bool {
        types.contains(&self.account_type.as_str())
    }
}
