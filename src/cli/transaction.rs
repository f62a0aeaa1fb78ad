//! Transaction CLI commands
//!
//! Add, list, show, edit and delete transactions inside a session.

use std::io::Write;

use clap::Subcommand;

use crate::display::{
    format_transaction_details, format_transaction_register, format_transaction_short,
    DisplayOptions,
};
use crate::error::{TrackerError, TrackerResult};
use crate::models::category::default_category;
use crate::models::{FilterCriteria, NewTransaction};
use crate::services::TransactionService;

use super::{parse_amount, parse_date, parse_kind, resolve_category};

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Short description
        title: String,
        /// Amount (e.g., "150.75")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List the transactions passing the active filter
    #[command(alias = "ls")]
    List,
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// New type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
        /// New note (empty to clear)
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Delete a transaction
    #[command(alias = "rm")]
    Delete {
        /// Transaction ID
        id: String,
        /// Skip confirmation
        #[arg(short, long)]
        force: bool,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command<W: Write>(
    service: &mut TransactionService<'_>,
    filter: &FilterCriteria,
    categories: &[String],
    opts: &DisplayOptions,
    cmd: TransactionCommands,
    out: &mut W,
) -> TrackerResult<()> {
    match cmd {
        TransactionCommands::Add {
            title,
            amount,
            kind,
            category,
            date,
            note,
        } => {
            let amount = parse_amount(&amount)?;
            let kind = parse_kind(&kind)?;

            // Parse date (default to today)
            let date = match date {
                Some(date_str) => parse_date(&date_str)?,
                None => chrono::Local::now().date_naive(),
            };

            let category = match category {
                Some(name) => resolve_category(categories, &name),
                None => default_category(categories).to_string(),
            };

            let mut data = NewTransaction::new(title, amount, kind, category, date);
            if let Some(note) = note {
                data = data.with_note(note);
            }

            let txn = service.create(data)?;

            writeln!(out, "Added transaction: {}", txn.id)?;
            writeln!(out, "  Date:     {}", opts.date(txn.date))?;
            writeln!(out, "  Title:    {}", txn.title)?;
            writeln!(out, "  Amount:   {}", opts.money(txn.signed_amount()))?;
            writeln!(out, "  Category: {}", txn.category)?;
            if !filter.matches(&txn) {
                writeln!(out, "Note: the active filter hides this transaction")?;
            }
        }

        TransactionCommands::List => {
            let visible = service.visible(filter);

            if !filter.is_empty() {
                writeln!(out, "Filter: {}", filter)?;
            }
            write!(out, "{}", format_transaction_register(&visible, opts))?;
            writeln!(
                out,
                "Showing {} of {} transactions",
                visible.len(),
                service.count()
            )?;
        }

        TransactionCommands::Show { id } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| TrackerError::transaction_not_found(&id))?;

            write!(out, "{}", format_transaction_details(&txn, opts))?;
        }

        TransactionCommands::Edit {
            id,
            title,
            amount,
            kind,
            category,
            date,
            note,
        } => {
            let mut txn = service
                .find(&id)?
                .ok_or_else(|| TrackerError::transaction_not_found(&id))?;

            if title.is_none()
                && amount.is_none()
                && kind.is_none()
                && category.is_none()
                && date.is_none()
                && note.is_none()
            {
                writeln!(out, "No changes specified.")?;
                return Ok(());
            }

            if let Some(title) = title {
                txn.title = title;
            }
            if let Some(amount) = amount {
                txn.amount = parse_amount(&amount)?;
            }
            if let Some(kind) = kind {
                txn.kind = parse_kind(&kind)?;
            }
            if let Some(name) = category {
                txn.category = resolve_category(categories, &name);
            }
            if let Some(date_str) = date {
                txn.date = parse_date(&date_str)?;
            }
            if let Some(note) = note {
                txn.note = Some(note);
            }

            let short = txn.id.to_string();
            if service.update(txn)? {
                writeln!(out, "Updated transaction: {}", short)?;
            } else {
                return Err(TrackerError::transaction_not_found(&id));
            }
        }

        TransactionCommands::Delete { id, force } => {
            let txn = service
                .find(&id)?
                .ok_or_else(|| TrackerError::transaction_not_found(&id))?;

            if !force {
                writeln!(out, "About to delete: {}", format_transaction_short(&txn, opts))?;
                writeln!(out, "Use --force to confirm deletion")?;
                return Ok(());
            }

            service.delete(txn.id);
            writeln!(out, "Deleted transaction: {}", txn.id)?;
        }
    }

    Ok(())
}
