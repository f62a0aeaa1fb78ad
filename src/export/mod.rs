//! Export module for the expense tracker
//!
//! Writes the visible transaction list in several formats:
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - JSON: versioned document with filter and summary metadata
//! - YAML: the same document, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_transactions_csv;
pub use self::json::{export_json, TransactionExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_yaml;

use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
    Yaml,
}

impl FromStr for ExportFormat {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(TrackerError::Validation(format!(
                "Unknown export format '{}' (use csv, json or yaml)",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}
