//! CSV Export functionality
//!
//! Exports transactions to a spreadsheet-compatible CSV file, one row per
//! transaction with decimal amounts.

use std::io::Write;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

const HEADER: [&str; 7] = ["ID", "Date", "Title", "Type", "Category", "Amount", "Note"];

/// Export transactions to CSV
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: &mut W,
) -> TrackerResult<()> {
    let export_err = |e: csv::Error| TrackerError::Export(e.to_string());
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER).map_err(export_err)?;

    for txn in transactions {
        let id = txn.id.as_uuid().to_string();
        let date = txn.date.format("%Y-%m-%d").to_string();
        let amount = txn.amount.to_decimal_string();
        csv_writer
            .write_record([
                id.as_str(),
                date.as_str(),
                txn.title.as_str(),
                txn.kind.as_str(),
                txn.category.as_str(),
                amount.as_str(),
                txn.note.as_deref().unwrap_or(""),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}
