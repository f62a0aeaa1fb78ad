//! Reports over transaction lists
//!
//! Totals and the per-category expense breakdown shown on the dashboard.

pub mod summary;

pub use summary::{CategoryBreakdown, CategoryTotal, Summary};
