//! YAML Export functionality
//!
//! Same document as the JSON export, in a human-readable form.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::TransactionExport;
use crate::models::{FilterCriteria, Transaction};

/// Export transactions to YAML
pub fn export_yaml<W: Write>(
    transactions: &[Transaction],
    filter: &FilterCriteria,
    writer: &mut W,
) -> TrackerResult<()> {
    let export = TransactionExport::new(transactions, filter);
    let export_err = |e: std::io::Error| TrackerError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# Filter: {}", filter).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
