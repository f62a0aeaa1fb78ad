//! Income/expense summary and per-category expense breakdown
//!
//! Both are recomputed from whatever list they are given, usually the
//! currently visible transactions.

use crate::models::{Money, Transaction, TransactionKind};

/// Totals over a transaction list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Sum of income amounts
    pub total_income: Money,
    /// Sum of expense amounts (positive)
    pub total_expense: Money,
    /// Income minus expense; may be negative
    pub balance: Money,
    /// Number of transactions summarized
    pub transaction_count: usize,
}

impl Summary {
    /// Summarize a list of transactions
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut total_income = Money::zero();
        let mut total_expense = Money::zero();

        for txn in transactions {
            match txn.kind {
                TransactionKind::Income => total_income += txn.amount,
                TransactionKind::Expense => total_expense += txn.amount,
            }
        }

        Self {
            total_income,
            total_expense,
            balance: total_income - total_expense,
            transaction_count: transactions.len(),
        }
    }
}

/// One category's share of expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
}

/// Expense totals grouped by category
///
/// Entries are ordered by the first occurrence of each category in the input.
/// Only categories that actually appear among the expenses are present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryBreakdown {
    entries: Vec<CategoryTotal>,
}

impl CategoryBreakdown {
    /// Group the expense transactions of a list by category
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut entries: Vec<CategoryTotal> = Vec::new();

        for txn in transactions.iter().filter(|t| t.is_expense()) {
            match entries.iter_mut().find(|e| e.category == txn.category) {
                Some(entry) => {
                    entry.total += txn.amount;
                    entry.transaction_count += 1;
                }
                None => entries.push(CategoryTotal {
                    category: txn.category.clone(),
                    total: txn.amount,
                    transaction_count: 1,
                }),
            }
        }

        Self { entries }
    }

    /// Total for a category, if it has any expenses
    pub fn get(&self, category: &str) -> Option<Money> {
        self.entries
            .iter()
            .find(|e| e.category == category)
            .map(|e| e.total)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum over all categories; equals the summary's total expense
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.total).sum()
    }

    /// Percentage of total expense spent in a category (0.0 when empty)
    pub fn share(&self, category: &str) -> f64 {
        let total = self.total();
        if total.is_zero() {
            return 0.0;
        }
        self.get(category)
            .map(|amount| amount.as_f64() / total.as_f64() * 100.0)
            .unwrap_or(0.0)
    }
}

impl<'a> IntoIterator for &'a CategoryBreakdown {
    type Item = &'a CategoryTotal;
    type IntoIter = std::slice::Iter<'a, CategoryTotal>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
