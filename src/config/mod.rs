//! Configuration module for Mini Ledger
//!
//! - Base directory resolution (with environment override)
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::{QuoteSettings, Settings};
