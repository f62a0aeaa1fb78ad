//! Summary and breakdown display
//!
//! Terminal rendering of the dashboard: income/expense/balance totals and the
//! per-category expense breakdown with proportional bars.

use crate::reports::{CategoryBreakdown, Summary};

use super::DisplayOptions;

const BAR_WIDTH: usize = 30;

/// Format the three summary totals
pub fn format_summary(summary: &Summary, opts: &DisplayOptions) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<15} {:>14}\n",
        "Total Income:",
        opts.money(summary.total_income)
    ));
    output.push_str(&format!(
        "{:<15} {:>14}\n",
        "Total Expense:",
        opts.money(summary.total_expense)
    ));
    output.push_str(&"-".repeat(30));
    output.push('\n');

    let marker = if summary.balance.is_negative() { "  (overspent)" } else { "" };
    output.push_str(&format!(
        "{:<15} {:>14}{}\n",
        "Balance:",
        opts.money(summary.balance),
        marker
    ));
    output.push_str(&format!("Transactions:   {}\n", summary.transaction_count));

    output
}

/// Format the expense breakdown, one line per category
///
/// Categories appear in breakdown order; each line shows the amount, its
/// share of total expense, and a bar scaled to that share.
pub fn format_breakdown(breakdown: &CategoryBreakdown, opts: &DisplayOptions) -> String {
    if breakdown.is_empty() {
        return "No expense data to display.\n".to_string();
    }

    let mut output = String::new();
    output.push_str("Expense Breakdown\n");
    output.push_str(&"=".repeat(70));
    output.push('\n');

    for entry in breakdown {
        let share = breakdown.share(&entry.category);
        let filled = ((share / 100.0) * BAR_WIDTH as f64).round() as usize;
        output.push_str(&format!(
            "{:<18} {:>12} {:>5.0}% {}\n",
            truncate_label(&entry.category, 18),
            opts.money(entry.total),
            share,
            "#".repeat(filled.min(BAR_WIDTH))
        ));
    }

    output.push_str(&"-".repeat(70));
    output.push('\n');
    output.push_str(&format!(
        "{:<18} {:>12}\n",
        "Total",
        opts.money(breakdown.total())
    ));

    output
}

fn truncate_label(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        s.chars().take(max_len).collect()
    }
}
