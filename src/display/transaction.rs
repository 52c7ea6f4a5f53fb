//! Transaction display formatting
//!
//! Register views of ledger records with income/expense/balance totals.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::config::settings::Settings;
use crate::models::{Transaction, DATE_FORMAT};
use crate::reports::summarize;

/// Format a single transaction as a register row
pub fn format_transaction_row(txn: &Transaction, settings: &Settings) -> String {
    let sign = if txn.is_income() { "+" } else { "-" };

    format!(
        "{:10} {:8} {:10} {:>18}  {}",
        format_date(txn.date(), &settings.date_format),
        txn.kind().as_str(),
        txn.category().as_str(),
        format!("{}{}", sign, txn.amount().format_with_symbol(&settings.currency_symbol)),
        truncate(txn.description().unwrap_or(""), 30)
    )
    .trim_end()
    .to_string()
}

/// Format a list of transactions as a register followed by totals
pub fn format_transaction_register(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:8} {:10} {:>18}  {}\n",
        "Date", "Type", "Category", "Amount", "Description"
    ));
    output.push_str(&"-".repeat(72));
    output.push('\n');

    for txn in transactions {
        output.push_str(&format_transaction_row(txn, settings));
        output.push('\n');
    }

    let totals = summarize(transactions);
    let symbol = &settings.currency_symbol;
    output.push_str(&"-".repeat(72));
    output.push('\n');
    output.push_str(&format!(
        "{:>31} {:>18}\n",
        "Income:",
        totals.income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:>31} {:>18}\n",
        "Expense:",
        totals.expense.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:>31} {:>18}\n",
        "Balance:",
        totals.balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!("{} transaction(s)\n", transactions.len()));

    output
}

/// Format a date with a user-supplied strftime string, falling back to
/// `YYYY-MM-DD` when the format can't be rendered
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut output = String::new();
    match write!(output, "{}", date.format(format)) {
        Ok(()) => output,
        Err(_) => date.format(DATE_FORMAT).to_string(),
    }
}

/// Truncate a string to at most `max_chars` characters
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
