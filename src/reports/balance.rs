//! Income, expense and balance totals

use serde::Serialize;

use crate::models::{Money, Transaction};

/// Income/expense totals over a set of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BalanceSummary {
    pub income: Money,
    pub expense: Money,
    /// `income - expense`
    pub balance: Money,
}

/// Sum of all income amounts
pub fn total_income(records: &[Transaction]) -> Money {
    records
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount())
        .sum()
}

/// Sum of all expense amounts (positive)
pub fn total_expense(records: &[Transaction]) -> Money {
    records
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.amount())
        .sum()
}

/// Income minus expense
pub fn balance(records: &[Transaction]) -> Money {
    records.iter().map(|t| t.signed_amount()).sum()
}

/// All three totals in one pass
pub fn summarize(records: &[Transaction]) -> BalanceSummary {
    let mut summary = BalanceSummary::default();
    for txn in records {
        if txn.is_income() {
            summary.income += txn.amount();
        } else {
            summary.expense += txn.amount();
        }
    }
    summary.balance = summary.income - summary.expense;
    summary
}
