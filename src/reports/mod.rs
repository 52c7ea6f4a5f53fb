//! Ledger analytics
//!
//! Pure functions over an in-memory slice of records: balances, category
//! breakdowns and monthly summaries. Nothing here touches storage.

pub mod balance;
pub mod breakdown;
pub mod monthly;

pub use balance::{balance, summarize, total_expense, total_income, BalanceSummary};
pub use breakdown::{category_breakdown, percentage_of};
pub use monthly::{monthly_summary, MonthlySummary};
