//! JSON Export functionality
//!
//! Exports a transaction list, with the filter that produced it and summary
//! metadata, as a versioned JSON document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{FilterCriteria, Transaction};
use crate::reports::Summary;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported transaction list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Filter applied to the exported list
    pub filter: FilterCriteria,

    /// The transactions, most recent first. Amounts are in cents.
    pub transactions: Vec<Transaction>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,

    /// Totals as decimal strings, e.g. "1350.75"
    pub total_income: String,
    pub total_expense: String,
    pub balance: String,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl TransactionExport {
    /// Build an export from a visible list and the filter that produced it
    pub fn new(transactions: &[Transaction], filter: &FilterCriteria) -> Self {
        let summary = Summary::from_transactions(transactions);

        let earliest_transaction = transactions.iter().map(|t| t.date).min().map(|d| d.to_string());
        let latest_transaction = transactions.iter().map(|t| t.date).max().map(|d| d.to_string());

        let metadata = ExportMetadata {
            transaction_count: transactions.len(),
            total_income: summary.total_income.to_decimal_string(),
            total_expense: summary.total_expense.to_decimal_string(),
            balance: summary.balance.to_decimal_string(),
            earliest_transaction,
            latest_transaction,
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            filter: filter.clone(),
            transactions: transactions.to_vec(),
            metadata,
        }
    }
}

/// Export transactions to JSON
pub fn export_json<W: Write>(
    transactions: &[Transaction],
    filter: &FilterCriteria,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    let export = TransactionExport::new(transactions, filter);

    if pretty {
        serde_json::to_writer_pretty(&mut *writer, &export)
    } else {
        serde_json::to_writer(&mut *writer, &export)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))?;

    writeln!(writer).map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}
