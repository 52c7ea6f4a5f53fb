//! Monthly Summary
//!
//! Income, expense and balance for one calendar month, with per-category
//! breakdowns for both transaction types.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Category, Money, MonthPeriod, Transaction, TransactionType};

use super::balance::summarize;
use super::breakdown::{category_breakdown, percentage_of};

/// Statistics for one calendar month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlySummary {
    pub period: MonthPeriod,
    pub total_income: Money,
    pub total_expense: Money,
    pub balance: Money,
    pub transaction_count: usize,
    pub income_by_category: Vec<(Category, Money)>,
    pub expense_by_category: Vec<(Category, Money)>,
}

/// Summarize the records dated within `year`-`month`
///
/// `records` may span any dates; only those inside the month are counted.
pub fn monthly_summary(records: &[Transaction], year: i32, month: u32) -> LedgerResult<MonthlySummary> {
    let period = MonthPeriod::new(year, month)?;
    Ok(MonthlySummary::for_period(records, period))
}

impl MonthlySummary {
    /// Build the summary for an already validated month
    pub fn for_period(records: &[Transaction], period: MonthPeriod) -> Self {
        let in_month: Vec<Transaction> = records
            .iter()
            .filter(|t| period.contains(t.date()))
            .cloned()
            .collect();

        let totals = summarize(&in_month);

        Self {
            period,
            total_income: totals.income,
            total_expense: totals.expense,
            balance: totals.balance,
            transaction_count: in_month.len(),
            income_by_category: category_breakdown(&in_month, TransactionType::Income),
            expense_by_category: category_breakdown(&in_month, TransactionType::Expense),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.transaction_count == 0
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Summary: {}\n", self.period));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Income:",
            self.total_income.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Expense:",
            self.total_expense.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!(
            "{:<20} {:>20}\n",
            "Balance:",
            self.balance.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("{:<20} {:>20}\n", "Transactions:", self.transaction_count));

        if self.is_empty() {
            output.push_str("\nNo transactions this month.\n");
            return output;
        }

        push_breakdown(
            &mut output,
            "INCOME BY CATEGORY",
            &self.income_by_category,
            self.total_income,
            currency_symbol,
        );
        push_breakdown(
            &mut output,
            "EXPENSE BY CATEGORY",
            &self.expense_by_category,
            self.total_expense,
            currency_symbol,
        );

        output
    }

    /// Export the summary to CSV: one row per category plus a total row per type
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> LedgerResult<()> {
        let export_err = |e: csv::Error| LedgerError::Export(e.to_string());

        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer
            .write_record(["month", "type", "category", "amount", "percentage"])
            .map_err(export_err)?;

        let month = self.period.to_string();
        let sections = [
            (TransactionType::Income, &self.income_by_category, self.total_income),
            (TransactionType::Expense, &self.expense_by_category, self.total_expense),
        ];

        for (kind, breakdown, total) in sections {
            for (category, amount) in breakdown {
                let amount_text = amount.to_decimal_string();
                let share = format!("{:.2}", percentage_of(*amount, total));
                let row: [&str; 5] = [&month, kind.as_str(), category.as_str(), &amount_text, &share];
                csv_writer.write_record(row).map_err(export_err)?;
            }

            let total_text = total.to_decimal_string();
            let row: [&str; 5] = [&month, kind.as_str(), "TOTAL", &total_text, "100.00"];
            csv_writer.write_record(row).map_err(export_err)?;
        }

        let balance_text = self.balance.to_decimal_string();
        let row: [&str; 5] = [&month, "", "BALANCE", &balance_text, ""];
        csv_writer.write_record(row).map_err(export_err)?;

        csv_writer
            .flush()
            .map_err(|e| LedgerError::Export(e.to_string()))?;

        Ok(())
    }
}

fn push_breakdown(
    output: &mut String,
    title: &str,
    breakdown: &[(Category, Money)],
    total: Money,
    currency_symbol: &str,
) {
    if breakdown.is_empty() {
        return;
    }

    output.push_str(&format!("\n{}\n", title));
    output.push_str(&"-".repeat(60));
    output.push('\n');
    for (category, amount) in breakdown {
        output.push_str(&format!(
            "  {:<18} {:>20} {:>8.1}%\n",
            category.as_str(),
            amount.format_with_symbol(currency_symbol),
            percentage_of(*amount, total)
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_records() -> Vec<Transaction> {
        vec![
            Transaction::income(date(2024, 1, 25), Category::Salary, Money::from_units(3_000_000), "급여")
                .unwrap(),
            Transaction::expense(date(2024, 1, 15), Category::Food, Money::from_units(25_000), "dinner")
                .unwrap(),
            Transaction::expense(date(2024, 1, 20), Category::Transport, Money::from_units(55_000), "")
                .unwrap(),
            Transaction::expense(date(2024, 1, 31), Category::Food, Money::from_units(40_000), "")
                .unwrap(),
            Transaction::expense(date(2024, 2, 1), Category::Food, Money::from_units(1_000_000), "")
                .unwrap(),
            Transaction::income(date(2023, 12, 31), Category::Bonus, Money::from_units(500), "")
                .unwrap(),
        ]
    }

    #[test]
    fn test_empty_month() {
        let summary = monthly_summary(&[], 2024, 1).unwrap();
        assert_eq!(summary.total_income, Money::zero());
        assert_eq!(summary.total_expense, Money::zero());
        assert_eq!(summary.balance, Money::zero());
        assert_eq!(summary.transaction_count, 0);
        assert!(summary.income_by_category.is_empty());
        assert!(summary.expense_by_category.is_empty());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_invalid_month() {
        assert!(monthly_summary(&[], 2024, 13).unwrap_err().is_validation());
    }

    #[test]
    fn test_only_month_records_counted() {
        let summary = monthly_summary(&sample_records(), 2024, 1).unwrap();

        assert_eq!(summary.period.to_string(), "2024-01");
        assert_eq!(summary.transaction_count, 4);
        assert_eq!(summary.total_income, Money::from_units(3_000_000));
        assert_eq!(summary.total_expense, Money::from_units(120_000));
        assert_eq!(summary.balance, Money::from_units(2_880_000));
        assert_eq!(
            summary.expense_by_category,
            vec![
                (Category::Food, Money::from_units(65_000)),
                (Category::Transport, Money::from_units(55_000)),
            ]
        );
        assert_eq!(
            summary.income_by_category,
            vec![(Category::Salary, Money::from_units(3_000_000))]
        );
    }

    #[test]
    fn test_format_terminal() {
        let summary = monthly_summary(&sample_records(), 2024, 1).unwrap();
        let output = summary.format_terminal("₩");

        assert!(output.contains("Monthly Summary: 2024-01"));
        assert!(output.contains("₩3,000,000.00"));
        assert!(output.contains("₩2,880,000.00"));
        assert!(output.contains("EXPENSE BY CATEGORY"));
        assert!(output.contains("food"));

        let empty = monthly_summary(&[], 2024, 1).unwrap().format_terminal("$");
        assert!(empty.contains("No transactions this month."));
        assert!(!empty.contains("BY CATEGORY"));
    }

    #[test]
    fn test_export_csv() {
        let summary = monthly_summary(&sample_records(), 2024, 1).unwrap();
        let mut buffer = Vec::new();
        summary.export_csv(&mut buffer).unwrap();

        let csv = String::from_utf8(buffer).unwrap();
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "month,type,category,amount,percentage");
        assert_eq!(lines[1], "2024-01,income,salary,3000000.00,100.00");
        assert_eq!(lines[2], "2024-01,income,TOTAL,3000000.00,100.00");
        assert_eq!(lines[3], "2024-01,expense,food,65000.00,54.17");
        assert_eq!(lines[4], "2024-01,expense,transport,55000.00,45.83");
        assert_eq!(lines[5], "2024-01,expense,TOTAL,120000.00,100.00");
        assert_eq!(lines[6], "2024-01,,BALANCE,2880000.00,");
        assert_eq!(lines.len(), 7);
    }
}
