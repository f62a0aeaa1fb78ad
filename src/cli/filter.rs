//! Filter CLI commands
//!
//! The active filter lives for the whole session and narrows `list`,
//! `summary`, `breakdown` and `export`.

use std::io::Write;

use clap::Subcommand;

use crate::error::TrackerResult;
use crate::models::FilterCriteria;

use super::{parse_date, parse_kind, resolve_category};

/// Filter subcommands
#[derive(Subcommand, Debug)]
pub enum FilterCommands {
    /// Change the active filter; omitted options keep their current value
    Set {
        /// Case-insensitive text to look for in titles
        #[arg(short, long)]
        search: Option<String>,
        /// Only income or expense ("all" clears it)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        /// Exact category; known names are matched ignoring case ("" clears it)
        #[arg(short, long)]
        category: Option<String>,
        /// Earliest date, inclusive (YYYY-MM-DD, "" clears it)
        #[arg(long)]
        from: Option<String>,
        /// Latest date, inclusive (YYYY-MM-DD, "" clears it)
        #[arg(long)]
        to: Option<String>,
    },
    /// Clear every constraint
    #[command(alias = "clear")]
    Reset,
    /// Show the active filter
    Show,
}

/// Handle a filter command
pub fn handle_filter_command<W: Write>(
    filter: &mut FilterCriteria,
    categories: &[String],
    cmd: FilterCommands,
    out: &mut W,
) -> TrackerResult<()> {
    match cmd {
        FilterCommands::Set {
            search,
            kind,
            category,
            from,
            to,
        } => {
            // Parse everything before touching the active filter
            let kind = kind
                .map(|k| match k.trim().to_lowercase().as_str() {
                    "" | "all" => Ok(None),
                    _ => parse_kind(&k).map(Some),
                })
                .transpose()?;
            let from = from.map(|d| optional_date(&d)).transpose()?;
            let to = to.map(|d| optional_date(&d)).transpose()?;

            if let Some(term) = search {
                filter.search_term = term;
            }
            if let Some(kind) = kind {
                filter.kind = kind;
            }
            if let Some(category) = category {
                filter.category = match category.trim() {
                    "" => None,
                    c => Some(resolve_category(categories, c)),
                };
            }
            if let Some(from) = from {
                filter.start_date = from;
            }
            if let Some(to) = to {
                filter.end_date = to;
            }

            writeln!(out, "Filter: {}", filter)?;
        }

        FilterCommands::Reset => {
            filter.reset();
            writeln!(out, "Filter cleared.")?;
        }

        FilterCommands::Show => {
            writeln!(out, "Filter: {}", filter)?;
        }
    }

    Ok(())
}

fn optional_date(s: &str) -> TrackerResult<Option<chrono::NaiveDate>> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(s).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_categories, TransactionKind};
    use chrono::NaiveDate;
    use clap::Parser;

    #[derive(Parser)]
    #[command(no_binary_name = true)]
    struct Wrapper {
        #[command(subcommand)]
        cmd: FilterCommands,
    }

    fn run(filter: &mut FilterCriteria, args: &[&str]) -> TrackerResult<String> {
        let cmd = Wrapper::try_parse_from(args).unwrap().cmd;
        let mut out = Vec::new();
        handle_filter_command(filter, &default_categories(), cmd, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_set_merges_with_current_filter() {
        let mut filter = FilterCriteria::new();
        run(&mut filter, &["set", "--search", "rent"]).unwrap();
        run(&mut filter, &["set", "-t", "expense", "--from", "2024-07-01"]).unwrap();

        assert_eq!(filter.search_term, "rent");
        assert_eq!(filter.kind, Some(TransactionKind::Expense));
        assert_eq!(filter.start_date, NaiveDate::from_ymd_opt(2024, 7, 1));
        assert_eq!(filter.end_date, None);
    }

    #[test]
    fn test_set_clears_individual_fields() {
        let mut filter = FilterCriteria::new()
            .category("Rent")
            .kind(TransactionKind::Income)
            .from(NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());

        run(&mut filter, &["set", "-c", "", "-t", "all", "--from", ""]).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_category_uses_configured_spelling() {
        let mut filter = FilterCriteria::new();
        run(&mut filter, &["set", "-c", "groceries"]).unwrap();
        assert_eq!(filter.category.as_deref(), Some("Groceries"));

        run(&mut filter, &["set", "-c", "all"]).unwrap();
        assert_eq!(filter.category.as_deref(), Some("all"));

        run(&mut filter, &["set", "-c", " Pets "]).unwrap();
        assert_eq!(filter.category.as_deref(), Some("Pets"));
    }

    #[test]
    fn test_invalid_input_leaves_filter_untouched() {
        let mut filter = FilterCriteria::new().search("rent");
        let err = run(&mut filter, &["set", "--search", "food", "--to", "soon"]).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(filter.search_term, "rent");

        assert!(run(&mut filter, &["set", "-t", "gift"]).unwrap_err().is_validation());
    }

    #[test]
    fn test_reset_and_show() {
        let mut filter = FilterCriteria::new().search("rent");
        let output = run(&mut filter, &["show"]).unwrap();
        assert!(output.contains("search: \"rent\""));

        let output = run(&mut filter, &["reset"]).unwrap();
        assert!(output.contains("Filter cleared"));
        assert!(filter.is_empty());

        let output = run(&mut filter, &["show"]).unwrap();
        assert!(output.contains("(no filters)"));
    }
}
