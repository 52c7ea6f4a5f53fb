//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the library.

pub mod quote;
pub mod report;
pub mod transaction;

pub use quote::{handle_quote, QuoteArgs};
pub use report::{handle_stats, StatsArgs};
pub use transaction::{handle_add, handle_list, AddArgs, ListArgs};
