//! Transaction service
//!
//! The boundary between user input and the store. Input is normalized and
//! validated here before the store sees it; reads run the filter engine and
//! the aggregator over the current contents of the store.

use tracing::{debug, info, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::models::category::canonical_category;
use crate::models::{FilterCriteria, NewTransaction, Transaction, TransactionId};
use crate::reports::{CategoryBreakdown, Summary};
use crate::storage::TransactionStore;

use super::filter::filter_transactions;

/// Service for transaction management
pub struct TransactionService<'a> {
    store: &'a mut TransactionStore,
    categories: &'a [String],
}

impl<'a> TransactionService<'a> {
    /// Create a new transaction service over a store
    ///
    /// `categories` is the list offered to the user; categories outside it
    /// are accepted with a warning.
    pub fn new(store: &'a mut TransactionStore, categories: &'a [String]) -> Self {
        Self { store, categories }
    }

    /// Validate and record a new transaction
    pub fn create(&mut self, data: NewTransaction) -> TrackerResult<Transaction> {
        let data = data.normalized();
        data.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        self.check_category(&data.category);

        let id = self.store.add(data);
        let txn = self
            .store
            .get(id)
            .cloned()
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        info!(id = %txn.id, title = %txn.title, amount = %txn.amount, kind = txn.kind.as_str(), "created transaction");
        Ok(txn)
    }

    /// Replace an existing transaction with a full, validated record
    ///
    /// Returns `Ok(false)` without touching the store when the id is unknown.
    pub fn update(&mut self, txn: Transaction) -> TrackerResult<bool> {
        let txn = txn.normalized();
        txn.validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        self.check_category(&txn.category);

        let id = txn.id;
        let before = self.store.get(id).cloned();
        if !self.store.update(txn.clone()) {
            debug!(id = %id, "update ignored, no such transaction");
            return Ok(false);
        }

        if let Some(before) = before {
            let changes = describe_changes(&before, &txn);
            info!(id = %id, changes = %changes, "updated transaction");
        }
        Ok(true)
    }

    /// Delete a transaction; unknown ids are ignored
    pub fn delete(&mut self, id: TransactionId) -> bool {
        let removed = self.store.remove(id);
        if removed {
            info!(id = %id, "deleted transaction");
        } else {
            debug!(id = %id, "delete ignored, no such transaction");
        }
        removed
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.store.get(id)
    }

    /// Find a transaction from a user-typed identifier
    ///
    /// Accepts the full id or its short `txn-xxxxxxxx` form. A short form
    /// matching more than one transaction is rejected.
    pub fn find(&self, identifier: &str) -> TrackerResult<Option<Transaction>> {
        let mut matches = self.store.all().iter().filter(|t| t.id.matches(identifier));
        let first = matches.next().cloned();
        if matches.next().is_some() {
            return Err(TrackerError::Validation(format!(
                "'{}' matches more than one transaction, use the full id",
                identifier
            )));
        }
        Ok(first)
    }

    /// The transactions passing `criteria`, most recent first
    pub fn visible(&self, criteria: &FilterCriteria) -> Vec<Transaction> {
        let visible = filter_transactions(self.store.all(), criteria);
        debug!(
            total = self.store.len(),
            visible = visible.len(),
            filter = %criteria,
            "recomputed visible transactions"
        );
        visible
    }

    /// Income, expense and balance over a list
    pub fn summary(&self, transactions: &[Transaction]) -> Summary {
        Summary::from_transactions(transactions)
    }

    /// Expense totals per category over a list
    pub fn category_breakdown(&self, transactions: &[Transaction]) -> CategoryBreakdown {
        CategoryBreakdown::from_transactions(transactions)
    }

    /// Number of stored transactions
    pub fn count(&self) -> usize {
        self.store.len()
    }

    fn check_category(&self, category: &str) {
        if canonical_category(self.categories, category).is_none() {
            warn!(category, "category is not in the configured list");
        }
    }
}

fn describe_changes(before: &Transaction, after: &Transaction) -> String {
    let mut changes = Vec::new();
    if before.title != after.title {
        changes.push(format!("title: '{}' -> '{}'", before.title, after.title));
    }
    if before.amount != after.amount {
        changes.push(format!("amount: {} -> {}", before.amount, after.amount));
    }
    if before.kind != after.kind {
        changes.push(format!("type: {} -> {}", before.kind.as_str(), after.kind.as_str()));
    }
    if before.category != after.category {
        changes.push(format!("category: {} -> {}", before.category, after.category));
    }
    if before.date != after.date {
        changes.push(format!("date: {} -> {}", before.date, after.date));
    }
    if before.note != after.note {
        changes.push("note changed".to_string());
    }

    if changes.is_empty() {
        "no changes".to_string()
    } else {
        changes.join(", ")
    }
}
