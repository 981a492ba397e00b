//! Reads a ledger export and rejects anything that is not a clean list of
//! entries before the metrics ever see it.

use std::path::{Path, PathBuf};

use serde_json::Value as JsonValue;
use thiserror::Error;

use ledger_ratios_accounting::LedgerEntry;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read ledger file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ledger file is not valid JSON")]
    Json(#[from] serde_json::Error),

    #[error("Invalid JSON structure: \"data\" key is missing.")]
    MissingData,

    #[error("Invalid data format in \"data\" key, expected ledger entries")]
    InvalidEntries(#[source] serde_json::Error),

    #[error("Invalid data format in \"data\" key: entry {index} has a non-finite total_value.")]
    NonFiniteValue { index: usize },
}

/// Read and validate the ledger at `path`.
pub fn load_ledger(path: &Path) -> Result<Vec<LedgerEntry>, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_ledger(&text)?;
    tracing::info!(path = %path.display(), entries = entries.len(), "ledger loaded");
    Ok(entries)
}

/// Decode `{"data": [...]}` into typed entries.
pub fn parse_ledger(text: &str) -> Result<Vec<LedgerEntry>, LoadError> {
    let mut root: JsonValue = serde_json::from_str(text)?;

    let data = root
        .as_object_mut()
        .and_then(|object| object.remove("data"))
        .ok_or(LoadError::MissingData)?;

    let entries: Vec<LedgerEntry> =
        serde_json::from_value(data).map_err(LoadError::InvalidEntries)?;
    ensure_finite(&entries)?;

    Ok(entries)
}

fn ensure_finite(entries: &[LedgerEntry]) -> Result<(), LoadError> {
    match entries.iter().position(|e| !e.total_value.is_finite()) {
        Some(index) => Err(LoadError::NonFiniteValue { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledger_ratios_accounting::{AccountCategory, ValueType};

    #[test]
    fn parses_entries_under_data() {
        let entries = parse_ledger(
            r#"{
                "object_category": "Balance Sheet",
                "data": [
                    {"account_category": "revenue", "account_type": "sales", "value_type": "debit", "total_value": 1000},
                    {"account_category": "liability", "account_type": "current", "value_type": "credit", "total_value": 250.75, "account_code": "2000"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].account_category, AccountCategory::Revenue);
        assert_eq!(entries[1].value_type, ValueType::Credit);
        assert_eq!(entries[1].total_value, 250.75);
    }

    #[test]
    fn empty_data_is_valid() {
        assert!(parse_ledger(r#"{"data": []}"#).unwrap().is_empty());
    }

    #[test]
    fn missing_data_key_is_structural_error() {
        let err = parse_ledger(r#"{"entries": []}"#).unwrap_err();
        assert!(matches!(err, LoadError::MissingData));
        assert_eq!(err.to_string(), "Invalid JSON structure: \"data\" key is missing.");
    }

    #[test]
    fn non_object_root_is_structural_error() {
        assert!(matches!(parse_ledger("[]").unwrap_err(), LoadError::MissingData));
        assert!(matches!(parse_ledger("42").unwrap_err(), LoadError::MissingData));
    }

    #[test]
    fn non_array_data_is_rejected() {
        let err = parse_ledger(r#"{"data": {"account_category": "revenue"}}"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidEntries(_)));

        let err = parse_ledger(r#"{"data": null}"#).unwrap_err();
        assert!(matches!(err, LoadError::InvalidEntries(_)));
    }

    #[test]
    fn wrongly_typed_fields_are_rejected() {
        let err = parse_ledger(
            r#"{"data": [{"account_category": "revenue", "account_type": "sales", "value_type": "debit", "total_value": "1000"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::InvalidEntries(_)));
        assert_eq!(
            err.to_string(),
            "Invalid data format in \"data\" key, expected ledger entries"
        );

        let err = parse_ledger(
            r#"{"data": [{"account_category": 7, "account_type": "sales", "value_type": "debit", "total_value": 1}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::InvalidEntries(_)));
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = parse_ledger(
            r#"{"data": [{"account_category": "revenue", "value_type": "debit", "total_value": 1}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::InvalidEntries(_)));
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(matches!(parse_ledger("{\"data\": [").unwrap_err(), LoadError::Json(_)));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let entries = vec![
            LedgerEntry::new(AccountCategory::Revenue, "sales", ValueType::Debit, 1.0),
            LedgerEntry::new(AccountCategory::Revenue, "sales", ValueType::Debit, f64::NAN),
        ];
        assert!(matches!(
            ensure_finite(&entries),
            Err(LoadError::NonFiniteValue { index: 1 })
        ));
        assert!(ensure_finite(&entries[..1]).is_ok());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_ledger(Path::new("definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("definitely/not/here.json"));
    }
}
