//! Metric error model.

use thiserror::Error;

use crate::metric::Metric;

/// Result type used by every ratio calculation.
pub type MetricResult<T> = Result<T, MetricError>;

/// Quantity a ratio divides by.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Denominator {
    Revenue,
    Liabilities,
}

impl Denominator {
    /// Subject and verb used in error messages ("revenue is", "liabilities are").
    pub fn phrase(self) -> &'static str {
        match self {
            Denominator::Revenue => "revenue is",
            Denominator::Liabilities => "liabilities are",
        }
    }
}

/// Computation-level error.
///
/// Only deterministic arithmetic failures live here. Malformed input is
/// rejected by the loader before any metric runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricError {
    /// The denominator of a ratio was exactly zero.
    #[error("{metric} calculation is undefined: {} zero.", .denominator.phrase())]
    DivisionUndefined {
        metric: Metric,
        denominator: Denominator,
    },
}

impl MetricError {
    pub fn division_undefined(metric: Metric, denominator: Denominator) -> Self {
        Self::DivisionUndefined {
            metric,
            denominator,
        }
    }

    /// The metric that failed.
    pub fn metric(&self) -> Metric {
        match self {
            MetricError::DivisionUndefined { metric, .. } => *metric,
        }
    }
}
