//! Filter engine
//!
//! Maps the full transaction list and a set of criteria to the visible list.

use crate::models::{FilterCriteria, Transaction};

/// Keep the transactions matching `criteria`, most recent date first
///
/// The sort is stable: transactions on the same date keep their input order,
/// which for the store is most recently added first.
pub fn filter_transactions(
    transactions: &[Transaction],
    criteria: &FilterCriteria,
) -> Vec<Transaction> {
    let mut visible: Vec<Transaction> = transactions
        .iter()
        .filter(|t| criteria.matches(t))
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.date.cmp(&a.date));
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewTransaction, TransactionId, TransactionKind};
    use chrono::NaiveDate;

    fn july(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 7, day).unwrap()
    }

    fn txn(title: &str, cents: i64, kind: TransactionKind, category: &str, day: u32) -> Transaction {
        Transaction::from_new(
            TransactionId::new(),
            NewTransaction::new(title, Money::from_cents(cents), kind, category, july(day)),
        )
    }

    fn scenario() -> Vec<Transaction> {
        vec![
            txn("Monthly Salary", 500000, TransactionKind::Income, "Salary", 1),
            txn("Groceries", 15075, TransactionKind::Expense, "Groceries", 5),
            txn("Rent", 120000, TransactionKind::Expense, "Rent", 1),
        ]
    }

    #[test]
    fn test_empty_criteria_sorts_by_date_descending() {
        let all = scenario();
        let visible = filter_transactions(&all, &FilterCriteria::new());

        assert_eq!(visible.len(), all.len());
        let titles: Vec<_> = visible.iter().map(|t| t.title.as_str()).collect();
        // Salary and Rent share a date; input order is kept between them
        assert_eq!(titles, ["Groceries", "Monthly Salary", "Rent"]);
    }

    #[test]
    fn test_start_date_excludes_earlier_records() {
        let all = scenario();
        let visible = filter_transactions(&all, &FilterCriteria::new().from(july(2)));

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Groceries");
    }

    #[test]
    fn test_result_is_subset_satisfying_all_clauses() {
        let mut all = scenario();
        all.push(txn("Grocery run", 4200, TransactionKind::Expense, "Groceries", 20));
        all.push(txn("Grocery refund", 500, TransactionKind::Income, "Groceries", 21));

        let criteria = FilterCriteria::new()
            .search("grocer")
            .kind(TransactionKind::Expense)
            .category("Groceries")
            .date_range(july(2), july(20));
        let visible = filter_transactions(&all, &criteria);

        assert_eq!(visible.len(), 2);
        for t in &visible {
            assert!(all.contains(t));
            assert!(t.title.to_lowercase().contains("grocer"));
            assert_eq!(t.kind, TransactionKind::Expense);
            assert_eq!(t.category, "Groceries");
            assert!(t.date >= july(2) && t.date <= july(20));
        }
        assert_eq!(visible[0].title, "Grocery run");
    }

    #[test]
    fn test_no_match_returns_empty() {
        let visible = filter_transactions(&scenario(), &FilterCriteria::new().search("zzz"));
        assert!(visible.is_empty());
        assert!(filter_transactions(&[], &FilterCriteria::new()).is_empty());
    }
}
