//! Storage layer for the expense tracker
//!
//! Transactions are kept in memory for the lifetime of a session. The store
//! is owned by the caller and passed by reference; there is no global state.

pub mod transactions;

pub use transactions::TransactionStore;
