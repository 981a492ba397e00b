//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A ledger entry
/// has no identity beyond a single calculation pass, so two entries with the
/// same fields are interchangeable.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Amount(f64);
///
/// impl ValueObject for Amount {}
///
/// assert_eq!(Amount(100.0), Amount(100.0));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
