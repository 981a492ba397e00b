//! Injectable warning sink for recoverable conditions.

use std::cell::RefCell;

/// Receives non-fatal warnings raised while computing metrics.
pub trait Diagnostics {
    fn warn(&self, message: &str);
}

/// Forwards warnings to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }
}

/// Keeps warnings in memory so the caller can inspect them afterwards.
#[derive(Debug, Default)]
pub struct CollectedDiagnostics {
    warnings: RefCell<Vec<String>>,
}

impl CollectedDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.borrow().is_empty()
    }
}

impl Diagnostics for CollectedDiagnostics {
    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }
}
