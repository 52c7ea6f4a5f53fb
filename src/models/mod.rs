//! Core data models for Mini Ledger
//!
//! Transaction records, their type/category vocabulary, money amounts and
//! calendar month periods.

pub mod category;
pub mod money;
pub mod period;
pub mod transaction;

pub use category::{Category, TransactionType};
pub use money::{Money, MoneyParseError};
pub use period::MonthPeriod;
pub use transaction::{parse_date, Transaction, TransactionInput, DATE_FORMAT, MAX_AMOUNT};
