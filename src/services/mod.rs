//! Service layer for the expense tracker
//!
//! The service layer validates user input on top of the store and exposes the
//! read operations (filtering, totals, breakdown) the interface renders.

pub mod filter;
pub mod transaction;

pub use filter::filter_transactions;
pub use transaction::TransactionService;
