//! Transaction display formatting
//!
//! Register tables and detail views for the terminal.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::models::{Transaction, TransactionKind};

use super::DisplayOptions;

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format a list of transactions as a register table
pub fn format_transaction_register(transactions: &[Transaction], opts: &DisplayOptions) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows = transactions.iter().map(|txn| RegisterRow {
        id: txn.id.short(),
        date: opts.date(txn.date),
        title: truncate(&txn.title, 30),
        category: txn.category.clone(),
        amount: opts.money(txn.signed_amount()),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format transaction details for display
pub fn format_transaction_details(txn: &Transaction, opts: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id.as_uuid()));
    output.push_str(&format!("Title:       {}\n", txn.title));
    output.push_str(&format!("Date:        {}\n", opts.date(txn.date)));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!("Category:    {}\n", txn.category));

    let amount = match txn.kind {
        TransactionKind::Income => opts.money(txn.amount),
        TransactionKind::Expense => opts.money(-txn.amount),
    };
    output.push_str(&format!("Amount:      {}\n", amount));

    if let Some(note) = &txn.note {
        output.push_str(&format!("Note:        {}\n", note));
    }

    output
}

/// Format a short transaction summary (one line)
pub fn format_transaction_short(txn: &Transaction, opts: &DisplayOptions) -> String {
    format!(
        "{} {} {} ({})",
        txn.id.short(),
        opts.date(txn.date),
        txn.title,
        opts.money(txn.signed_amount())
    )
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
