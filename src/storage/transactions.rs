//! In-memory transaction store
//!
//! Holds the session's transactions in insertion order, newest first. Nothing
//! is written to disk; the store lives as long as the session that owns it.

use crate::models::{NewTransaction, Transaction, TransactionId};

/// Ordered collection of transactions with id-based mutation
#[derive(Debug, Default, Clone)]
pub struct TransactionStore {
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a fresh id and prepend the transaction
    pub fn add(&mut self, data: NewTransaction) -> TransactionId {
        let id = self.fresh_id();
        self.transactions.insert(0, Transaction::from_new(id, data));
        id
    }

    /// Replace the stored record with the same id
    ///
    /// Returns `false` and leaves the store untouched when no record matches.
    pub fn update(&mut self, txn: Transaction) -> bool {
        match self.transactions.iter_mut().find(|t| t.id == txn.id) {
            Some(slot) => {
                *slot = txn;
                true
            }
            None => false,
        }
    }

    /// Delete the record with the given id
    ///
    /// Returns `false` when no record matches.
    pub fn remove(&mut self, id: TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        self.transactions.len() != before
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// All transactions, most recently added first
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    // Ids are unique within the store
    fn fresh_id(&self) -> TransactionId {
        loop {
            let id = TransactionId::new();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn new_txn(title: &str, cents: i64) -> NewTransaction {
        NewTransaction::new(
            title,
            Money::from_cents(cents),
            TransactionKind::Expense,
            "Other",
            NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
        )
    }

    #[test]
    fn test_add_prepends_with_unique_ids() {
        let mut store = TransactionStore::new();
        let first = store.add(new_txn("First", 100));
        let second = store.add(new_txn("Second", 200));

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        assert_eq!(store.all()[0].id, second);
        assert_eq!(store.all()[1].id, first);

        let ids: HashSet<_> = (0..50).map(|i| store.add(new_txn("x", i + 1))).collect();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_update_replaces_whole_record() {
        let mut store = TransactionStore::new();
        let id = store.add(new_txn("Coffee", 450));

        let mut edited = store.get(id).unwrap().clone();
        edited.title = "Coffee beans".to_string();
        edited.amount = Money::from_cents(1299);
        edited.kind = TransactionKind::Income;
        edited.note = Some("refund".to_string());

        assert!(store.update(edited.clone()));
        assert_eq!(store.get(id), Some(&edited));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut store = TransactionStore::new();
        store.add(new_txn("Coffee", 450));
        let snapshot = store.all().to_vec();

        let stranger = Transaction::from_new(TransactionId::new(), new_txn("Ghost", 1));
        assert!(!store.update(stranger));
        assert_eq!(store.all(), snapshot.as_slice());
    }

    #[test]
    fn test_update_keeps_position() {
        let mut store = TransactionStore::new();
        let a = store.add(new_txn("A", 1));
        store.add(new_txn("B", 2));

        let mut edited = store.get(a).unwrap().clone();
        edited.title = "A2".to_string();
        store.update(edited);

        assert_eq!(store.all()[1].title, "A2");
    }

    #[test]
    fn test_remove() {
        let mut store = TransactionStore::new();
        let a = store.add(new_txn("A", 1));
        let b = store.add(new_txn("B", 2));

        assert!(store.remove(a));
        assert!(!store.remove(a));
        assert_eq!(store.len(), 1);
        assert!(store.get(b).is_some());
        assert!(store.get(a).is_none());
    }
}
