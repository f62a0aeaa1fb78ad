//! CLI command handlers
//!
//! The interactive session owns the transaction store and the active filter.
//! Each input line is parsed with clap into a [`SessionCommand`] and handed to
//! the handlers in the submodules.

pub mod filter;
pub mod report;
pub mod transaction;

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::config::Settings;
use crate::display::DisplayOptions;
use crate::error::{TrackerError, TrackerResult};
use crate::models::category::canonical_category;
use crate::models::sample::sample_transactions;
use crate::models::{FilterCriteria, Money, TransactionKind};
use crate::services::TransactionService;
use crate::storage::TransactionStore;

pub use filter::FilterCommands;
pub use transaction::TransactionCommands;

/// One line of input inside the session
#[derive(Parser, Debug)]
#[command(
    name = "expense",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{subcommands}"
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Commands available inside the session
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Show income, expense and balance of the visible transactions
    Summary,

    /// Show expenses of the visible transactions grouped by category
    Breakdown,

    /// Manage the active filter
    #[command(subcommand)]
    Filter(FilterCommands),

    /// Export the visible transactions (csv, json or yaml)
    Export {
        #[arg(default_value = "json")]
        format: String,
    },

    /// List the categories offered for new transactions
    Categories,

    /// Leave the session
    #[command(alias = "quit")]
    Exit,
}

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// An interactive session: the store, the active filter and display settings
pub struct Session {
    store: TransactionStore,
    filter: FilterCriteria,
    settings: Settings,
    opts: DisplayOptions,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            store: TransactionStore::new(),
            filter: FilterCriteria::new(),
            opts: DisplayOptions::from_settings(&settings),
            settings,
        }
    }

    /// Seed the store with the sample transactions
    ///
    /// Samples are added newest-listed first so the store ends up in the
    /// listed order.
    pub fn seed_sample(&mut self) -> TrackerResult<usize> {
        let samples = sample_transactions();
        let count = samples.len();
        let mut service = self.service();
        for data in samples.into_iter().rev() {
            service.create(data)?;
        }
        Ok(count)
    }

    pub fn service(&mut self) -> TransactionService<'_> {
        TransactionService::new(&mut self.store, &self.settings.categories)
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn store(&self) -> &TransactionStore {
        &self.store
    }

    /// Parse and run one line of input
    pub fn execute_line<W: Write>(&mut self, line: &str, out: &mut W) -> TrackerResult<Flow> {
        let words = split_line(line)?;
        if words.is_empty() {
            return Ok(Flow::Continue);
        }

        match SessionLine::try_parse_from(&words) {
            Ok(parsed) => self.execute(parsed.command, out),
            Err(e) => {
                use clap::error::ErrorKind;
                match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                        write!(out, "{}", e)?;
                        Ok(Flow::Continue)
                    }
                    _ => Err(TrackerError::Parse(e.to_string().trim_end().to_string())),
                }
            }
        }
    }

    /// Run a parsed command
    pub fn execute<W: Write>(&mut self, cmd: SessionCommand, out: &mut W) -> TrackerResult<Flow> {
        let opts = &self.opts;
        let categories = &self.settings.categories;
        let mut service = TransactionService::new(&mut self.store, categories);

        match cmd {
            SessionCommand::Transaction(cmd) => {
                transaction::handle_transaction_command(&mut service, &self.filter, categories, opts, cmd, out)?;
            }
            SessionCommand::Summary => {
                report::handle_summary(&service, &self.filter, opts, out)?;
            }
            SessionCommand::Breakdown => {
                report::handle_breakdown(&service, &self.filter, opts, out)?;
            }
            SessionCommand::Filter(cmd) => {
                filter::handle_filter_command(&mut self.filter, categories, cmd, out)?;
            }
            SessionCommand::Export { format } => {
                report::handle_export(&service, &self.filter, &format, out)?;
            }
            SessionCommand::Categories => {
                for category in categories {
                    writeln!(out, "  {}", category)?;
                }
            }
            SessionCommand::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }
}

/// Read commands from `input` until `exit` or end of input
///
/// Errors from individual commands are reported and the session continues.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    prompt: bool,
) -> TrackerResult<()> {
    if prompt {
        write!(out, "expense> ")?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        match session.execute_line(&line, out) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => writeln!(out, "Error: {}", e)?,
        }
        if prompt {
            write!(out, "expense> ")?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Split an input line into words, honouring single and double quotes
pub fn split_line(line: &str) -> TrackerResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(TrackerError::Parse("Unterminated quote".to_string()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!("Invalid date format: '{}'. Use YYYY-MM-DD", s))
    })
}

/// Parse an amount typed by the user
pub fn parse_amount(s: &str) -> TrackerResult<Money> {
    Money::parse(s).map_err(|e| {
        TrackerError::Validation(format!(
            "Invalid amount: {}. Use a positive number like '150.75'",
            e
        ))
    })
}

/// Parse `income` or `expense`
pub fn parse_kind(s: &str) -> TrackerResult<TransactionKind> {
    s.parse::<TransactionKind>()
        .map_err(|e| TrackerError::Validation(e.to_string()))
}

/// Use the configured spelling of a category when it is a known one
pub fn resolve_category(categories: &[String], name: &str) -> String {
    canonical_category(categories, name)
        .map(str::to_string)
        .unwrap_or_else(|| name.trim().to_string())
}
