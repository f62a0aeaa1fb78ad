//! Expense Tracker - terminal-based personal income and expense tracker
//!
//! This library provides the core of the `expense` application: an in-memory
//! list of transactions, a filter engine that narrows and orders it, and an
//! aggregator that turns the visible list into totals and a per-category
//! expense breakdown.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Core data models (transactions, money, filter criteria)
//! - `storage`: The in-memory transaction store
//! - `services`: Validation boundary and the filter engine
//! - `reports`: Summary totals and category breakdown
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML output
//! - `config`: Configuration and path management
//! - `cli`: Interactive session commands
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use expense_tracker::models::{default_categories, FilterCriteria, Money, NewTransaction, TransactionKind};
//! use expense_tracker::services::TransactionService;
//! use expense_tracker::storage::TransactionStore;
//!
//! let categories = default_categories();
//! let mut store = TransactionStore::new();
//! let mut service = TransactionService::new(&mut store, &categories);
//!
//! service.create(NewTransaction::new(
//!     "Groceries",
//!     Money::from_cents(15075),
//!     TransactionKind::Expense,
//!     "Groceries",
//!     NaiveDate::from_ymd_opt(2024, 7, 5).unwrap(),
//! ))?;
//!
//! let visible = service.visible(&FilterCriteria::new());
//! assert_eq!(service.summary(&visible).balance, Money::from_cents(-15075));
//! # Ok::<(), expense_tracker::TrackerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
