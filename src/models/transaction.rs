//! Transaction model
//!
//! A [`Transaction`] is one income or expense entry in the ledger. It can only
//! be obtained through validated construction and is read-only afterwards, so
//! every value held in memory satisfies the record invariants:
//!
//! - `0 < amount <= MAX_AMOUNT`
//! - `category` is allowed for `kind`
//! - `date` is a real calendar date

use chrono::NaiveDate;
use std::fmt;

use super::category::{Category, TransactionType};
use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Date format used for input and the ledger file
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount a single transaction may carry (10 trillion units)
///
/// Keeps totals over hundreds of thousands of maximal records within `i64`.
pub const MAX_AMOUNT: Money = Money::from_units(10_000_000_000_000);

/// A validated ledger entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    date: NaiveDate,
    kind: TransactionType,
    category: Category,
    amount: Money,
    description: Option<String>,
}

/// Raw, unvalidated input for a transaction (e.g. from a form or the CLI)
#[derive(Debug, Clone, Default)]
pub struct TransactionInput {
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub description: Option<String>,
}

impl Transaction {
    /// Create a transaction from typed values
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::Validation`] if the amount is not positive,
    /// exceeds [`MAX_AMOUNT`], or the category is not allowed for the
    /// transaction type.
    pub fn new(
        date: NaiveDate,
        kind: TransactionType,
        category: Category,
        amount: Money,
        description: Option<String>,
    ) -> LedgerResult<Self> {
        if !amount.is_positive() {
            return Err(LedgerError::Validation(format!(
                "Amount must be greater than zero, got {}",
                amount
            )));
        }

        if amount > MAX_AMOUNT {
            return Err(LedgerError::Validation(format!(
                "Amount {} exceeds the maximum of {}",
                amount, MAX_AMOUNT
            )));
        }

        if !kind.allows(category) {
            return Err(LedgerError::Validation(format!(
                "Category '{}' is not allowed for {} transactions (allowed: {})",
                category,
                kind,
                kind.categories()
                    .iter()
                    .map(|c| c.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )));
        }

        let description = description
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());

        Ok(Self {
            date,
            kind,
            category,
            amount,
            description,
        })
    }

    /// Create an income transaction
    pub fn income(
        date: NaiveDate,
        category: Category,
        amount: Money,
        description: impl Into<String>,
    ) -> LedgerResult<Self> {
        Self::new(
            date,
            TransactionType::Income,
            category,
            amount,
            Some(description.into()),
        )
    }

    /// Create an expense transaction
    pub fn expense(
        date: NaiveDate,
        category: Category,
        amount: Money,
        description: impl Into<String>,
    ) -> LedgerResult<Self> {
        Self::new(
            date,
            TransactionType::Expense,
            category,
            amount,
            Some(description.into()),
        )
    }

    /// Validate raw string input and build a transaction from it
    pub fn from_input(input: &TransactionInput) -> LedgerResult<Self> {
        let date = parse_date(&input.date)?;
        let kind: TransactionType = input.kind.parse()?;
        let category: Category = input.category.parse()?;
        let amount = Money::parse(&input.amount)
            .map_err(|e| LedgerError::Validation(e.to_string()))?;

        Self::new(date, kind, category, amount, input.description.clone())
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> TransactionType {
        self.kind
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Always positive
    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with sign applied: positive for income, negative for expense
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    pub fn matches_category(&self, category: Category) -> bool {
        self.category == category
    }

    /// Check whether the date lies in `start..=end`
    pub fn is_in_date_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {}",
            self.date.format(DATE_FORMAT),
            self.kind,
            self.category,
            self.amount,
            self.description.as_deref().unwrap_or("")
        )
    }
}

/// Parse a `YYYY-MM-DD` date, reporting failures as validation errors
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| {
        LedgerError::Validation(format!("Invalid date '{}': use YYYY-MM-DD", s.trim()))
    })
}
