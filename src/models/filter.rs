//! Filter criteria for the visible transaction list
//!
//! Every field is optional; an empty field places no constraint.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::transaction::{Transaction, TransactionKind};

/// Active search and filter constraints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the title
    #[serde(default)]
    pub search_term: String,
    /// Exact category match
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<TransactionKind>,
    /// Inclusive lower bound
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl FilterCriteria {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn from(mut self, start: NaiveDate) -> Self {
        self.start_date = Some(start);
        self
    }

    pub fn to(mut self, end: NaiveDate) -> Self {
        self.end_date = Some(end);
        self
    }

    pub fn date_range(self, start: NaiveDate, end: NaiveDate) -> Self {
        self.from(start).to(end)
    }

    /// Clear every constraint
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when no field constrains the list
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.active_category().is_none()
            && self.kind.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// The category constraint, treating an empty string as "any"
    pub fn active_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    /// Check whether a transaction passes all five clauses
    pub fn matches(&self, txn: &Transaction) -> bool {
        let search_match = self.search_term.is_empty()
            || txn
                .title
                .to_lowercase()
                .contains(&self.search_term.to_lowercase());
        let kind_match = self.kind.map_or(true, |kind| txn.kind == kind);
        let category_match = self
            .active_category()
            .map_or(true, |category| txn.category == category);
        let start_match = self.start_date.map_or(true, |start| txn.date >= start);
        let end_match = self.end_date.map_or(true, |end| txn.date <= end);

        search_match && kind_match && category_match && start_match && end_match
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "(no filters)");
        }

        let mut parts = Vec::new();
        if !self.search_term.is_empty() {
            parts.push(format!("search: \"{}\"", self.search_term));
        }
        if let Some(kind) = self.kind {
            parts.push(format!("type: {}", kind.as_str()));
        }
        if let Some(category) = self.active_category() {
            parts.push(format!("category: {}", category));
        }
        if let Some(start) = self.start_date {
            parts.push(format!("from: {}", start));
        }
        if let Some(end) = self.end_date {
            parts.push(format!("to: {}", end));
        }
        write!(f, "{}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, TransactionId};

    fn txn(title: &str, kind: TransactionKind, category: &str, day: u32) -> Transaction {
        Transaction::from_new(
            TransactionId::new(),
            NewTransaction::new(
                title,
                Money::from_cents(1000),
                kind,
                category,
                NaiveDate::from_ymd_opt(2024, 7, day).unwrap(),
            ),
        )
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = FilterCriteria::new();
        assert!(filter.is_empty());
        assert!(filter.matches(&txn("Rent", TransactionKind::Expense, "Rent", 1)));
        assert_eq!(filter.to_string(), "(no filters)");
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filter = FilterCriteria::new().search("SALA");
        assert!(filter.matches(&txn("Monthly Salary", TransactionKind::Income, "Salary", 1)));
        assert!(!filter.matches(&txn("Rent", TransactionKind::Expense, "Rent", 1)));
    }

    #[test]
    fn test_empty_category_string_is_no_filter() {
        let filter = FilterCriteria::new().category("");
        assert!(filter.is_empty());
        assert!(filter.matches(&txn("Rent", TransactionKind::Expense, "Rent", 1)));
    }

    #[test]
    fn test_category_and_kind_are_exact() {
        let filter = FilterCriteria::new()
            .category("Rent")
            .kind(TransactionKind::Expense);
        assert!(filter.matches(&txn("Rent", TransactionKind::Expense, "Rent", 1)));
        assert!(!filter.matches(&txn("Rent", TransactionKind::Expense, "rent", 1)));
        assert!(!filter.matches(&txn("Rent", TransactionKind::Income, "Rent", 1)));
    }

    #[test]
    fn test_date_bounds_are_inclusive() {
        let filter = FilterCriteria::new().date_range(
            NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
            NaiveDate::from_ymd_opt(2024, 7, 10).unwrap(),
        );
        assert!(!filter.matches(&txn("a", TransactionKind::Expense, "Other", 4)));
        assert!(filter.matches(&txn("a", TransactionKind::Expense, "Other", 5)));
        assert!(filter.matches(&txn("a", TransactionKind::Expense, "Other", 10)));
        assert!(!filter.matches(&txn("a", TransactionKind::Expense, "Other", 11)));
    }

    #[test]
    fn test_reset_and_display() {
        let mut filter = FilterCriteria::new()
            .search("rent")
            .kind(TransactionKind::Expense)
            .from(NaiveDate::from_ymd_opt(2024, 7, 2).unwrap());
        assert_eq!(
            filter.to_string(),
            "search: \"rent\", type: expense, from: 2024-07-02"
        );

        filter.reset();
        assert!(filter.is_empty());
    }
}
