//! Command-line front end: configuration, ledger loading and report output.

pub mod app;
pub mod config;
pub mod loader;

pub use app::run;
pub use config::{Config, OutputFormat};
pub use loader::{load_ledger, parse_ledger, LoadError};
