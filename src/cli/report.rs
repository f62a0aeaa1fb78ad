//! CLI commands for reports and export
//!
//! Summary, breakdown and export all work on the visible transactions.

use std::io::Write;

use crate::display::{format_breakdown, format_summary, DisplayOptions};
use crate::error::TrackerResult;
use crate::export::{export_json, export_transactions_csv, export_yaml, ExportFormat};
use crate::models::FilterCriteria;
use crate::services::TransactionService;

/// Print income, expense and balance
pub fn handle_summary<W: Write>(
    service: &TransactionService<'_>,
    filter: &FilterCriteria,
    opts: &DisplayOptions,
    out: &mut W,
) -> TrackerResult<()> {
    let visible = service.visible(filter);
    let summary = service.summary(&visible);

    if !filter.is_empty() {
        writeln!(out, "Filter: {}", filter)?;
    }
    write!(out, "{}", format_summary(&summary, opts))?;
    Ok(())
}

/// Print the expense breakdown by category
pub fn handle_breakdown<W: Write>(
    service: &TransactionService<'_>,
    filter: &FilterCriteria,
    opts: &DisplayOptions,
    out: &mut W,
) -> TrackerResult<()> {
    let visible = service.visible(filter);
    let breakdown = service.category_breakdown(&visible);

    write!(out, "{}", format_breakdown(&breakdown, opts))?;
    Ok(())
}

/// Write the visible transactions in the requested format
pub fn handle_export<W: Write>(
    service: &TransactionService<'_>,
    filter: &FilterCriteria,
    format: &str,
    out: &mut W,
) -> TrackerResult<()> {
    let format: ExportFormat = format.parse()?;
    let visible = service.visible(filter);

    match format {
        ExportFormat::Csv => export_transactions_csv(&visible, out),
        ExportFormat::Json => export_json(&visible, filter, out, true),
        ExportFormat::Yaml => export_yaml(&visible, filter, out),
    }
}
