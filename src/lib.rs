//! Mini Ledger - personal income and expense tracking
//!
//! This library provides the core functionality for the `ledger` command-line
//! tool. Transactions are validated on construction, appended to a flat CSV
//! file, and summarized by month and category. A separate quote module looks
//! up daily stock price series from a market-data API.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Transaction records, money amounts, categories and months
//! - `storage`: CSV ledger store behind the [`storage::LedgerStore`] trait
//! - `reports`: Balances, category breakdowns and monthly summaries
//! - `quotes`: Stock price series lookup
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `ledger` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use mini_ledger::config::paths::LedgerPaths;
//! use mini_ledger::storage::{LedgerStore, Storage};
//! use mini_ledger::reports::monthly_summary;
//!
//! let storage = Storage::new(LedgerPaths::new()?)?;
//! let records = storage.ledger.find_all()?;
//! let summary = monthly_summary(&records, 2024, 1)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod quotes;
pub mod reports;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
