//! Transaction CLI commands
//!
//! `add` validates and appends one record; `list` prints a register for a
//! date, a date range, or the whole ledger.

use chrono::NaiveDate;
use clap::Args;

use crate::config::settings::Settings;
use crate::display::{format_date, format_transaction_register};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_date, Transaction, TransactionInput, DATE_FORMAT};
use crate::storage::{LedgerStore, Storage};

/// Arguments for `ledger add`
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Transaction type (income or expense)
    pub kind: String,
    /// Category (see `ledger categories`)
    pub category: String,
    /// Amount, e.g. "25000" or "12.50"
    pub amount: String,
    /// Transaction date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Free-text description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
}

impl AddArgs {
    /// Raw input for validation, with the date defaulted to `today`
    pub fn to_input(&self, today: NaiveDate) -> TransactionInput {
        TransactionInput {
            date: self
                .date
                .clone()
                .unwrap_or_else(|| today.format(DATE_FORMAT).to_string()),
            kind: self.kind.clone(),
            category: self.category.clone(),
            amount: self.amount.clone(),
            description: self.description.clone(),
        }
    }
}

/// Arguments for `ledger list`
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Show only transactions on this date (YYYY-MM-DD)
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub date: Option<String>,
    /// Start of the date range, inclusive
    #[arg(long)]
    pub from: Option<String>,
    /// End of the date range, inclusive
    #[arg(long)]
    pub to: Option<String>,
}

/// Which records `ledger list` shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListFilter {
    All,
    On(NaiveDate),
    Between(NaiveDate, NaiveDate),
}

impl ListArgs {
    pub fn filter(&self) -> LedgerResult<ListFilter> {
        if let Some(date) = &self.date {
            return Ok(ListFilter::On(parse_date(date)?));
        }

        match (&self.from, &self.to) {
            (None, None) => Ok(ListFilter::All),
            (from, to) => {
                let start = from.as_deref().map(parse_date).transpose()?.unwrap_or(NaiveDate::MIN);
                let end = to.as_deref().map(parse_date).transpose()?.unwrap_or(NaiveDate::MAX);
                if start > end {
                    return Err(LedgerError::Validation(format!(
                        "Start date {} is after end date {}",
                        start, end
                    )));
                }
                Ok(ListFilter::Between(start, end))
            }
        }
    }
}

/// Validate and append a transaction, returning the stored record
pub fn handle_add(storage: &Storage, settings: &Settings, args: &AddArgs) -> LedgerResult<Transaction> {
    let today = chrono::Local::now().date_naive();
    let txn = Transaction::from_input(&args.to_input(today))?;

    storage.ledger.append(&txn)?;

    println!(
        "Added {} {} of {} on {}",
        txn.kind(),
        txn.category(),
        txn.amount().format_with_symbol(&settings.currency_symbol),
        format_date(txn.date(), &settings.date_format)
    );
    Ok(txn)
}

/// Print the register for the selected records
pub fn handle_list(storage: &Storage, settings: &Settings, args: &ListArgs) -> LedgerResult<()> {
    let transactions = match args.filter()? {
        ListFilter::All => storage.ledger.find_all()?,
        ListFilter::On(date) => storage.ledger.find_by_date(date)?,
        ListFilter::Between(start, end) => storage.ledger.find_by_range(start, end)?,
    };

    print!("{}", format_transaction_register(&transactions, settings));
    Ok(())
}
