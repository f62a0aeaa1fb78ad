//! Core data models for the expense tracker
//!
//! Transactions, their identifiers and amounts, the category list, and the
//! criteria used to filter the visible list.

pub mod category;
pub mod filter;
pub mod ids;
pub mod money;
pub mod sample;
pub mod transaction;

pub use category::{default_categories, DEFAULT_CATEGORIES};
pub use filter::FilterCriteria;
pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{
    NewTransaction, Transaction, TransactionKind, TransactionValidationError, MAX_AMOUNT,
};
