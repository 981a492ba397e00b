//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use ledger_ratios_observability::LogFormat;

/// Compute accounting ratios from a JSON ledger export.
#[derive(Debug, Clone, Parser)]
#[command(name = "ledger-ratios", author, version, about, long_about = None)]
pub struct Config {
    /// JSON file holding `{"data": [ledger entries...]}`.
    #[arg(value_name = "PATH", env = "LEDGER_RATIOS_DATA", default_value = "data.json")]
    pub data: PathBuf,

    /// How to print the report.
    #[arg(long, value_enum, env = "LEDGER_RATIOS_OUTPUT", default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Layout of log lines written to stderr (level is taken from RUST_LOG).
    #[arg(long, value_enum, env = "LEDGER_RATIOS_LOG_FORMAT", default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

/// Report layout on stdout.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `Label: value` line per metric.
    #[default]
    Text,
    /// The raw figures as a JSON object.
    Json,
}
