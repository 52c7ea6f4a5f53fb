//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger records, categories and quote
//! series as plain-text tables.

pub mod category;
pub mod quote;
pub mod transaction;

pub use category::format_category_tree;
pub use quote::format_quote_series;
pub use transaction::{format_date, format_transaction_register, format_transaction_row};
