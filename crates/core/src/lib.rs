//! `ledger-ratios-core` — shared building blocks for the ratio calculators.
//!
//! This crate contains **pure domain** primitives (no I/O, no logging setup).

pub mod error;
pub mod metric;
pub mod value_object;

pub use error::{Denominator, MetricError, MetricResult};
pub use metric::Metric;
pub use value_object::ValueObject;
