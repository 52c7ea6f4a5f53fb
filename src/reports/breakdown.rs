//! Per-category totals

use crate::models::{Category, Money, Transaction, TransactionType};

/// Sum amounts per category for one transaction type
///
/// Sorted by amount, largest first. Categories with equal totals keep the
/// order in which they first appear in `records`.
pub fn category_breakdown(records: &[Transaction], kind: TransactionType) -> Vec<(Category, Money)> {
    let mut totals: Vec<(Category, Money)> = Vec::new();

    for txn in records.iter().filter(|t| t.kind() == kind) {
        match totals.iter_mut().find(|(c, _)| *c == txn.category()) {
            Some((_, amount)) => *amount += txn.amount(),
            None => totals.push((txn.category(), txn.amount())),
        }
    }

    // sort_by is stable
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
}

/// Share of `amount` in `total` as a percentage, 0 when `total` is zero
pub fn percentage_of(amount: Money, total: Money) -> f64 {
    if total.is_zero() {
        0.0
    } else {
        amount.cents() as f64 / total.cents() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::balance::{total_expense, total_income};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn expense(category: Category, units: i64) -> Transaction {
        Transaction::expense(date(1), category, Money::from_units(units), "").unwrap()
    }

    #[test]
    fn test_empty() {
        assert!(category_breakdown(&[], TransactionType::Expense).is_empty());
    }

    #[test]
    fn test_groups_and_sorts() {
        let records = vec![
            expense(Category::Food, 100),
            expense(Category::Transport, 500),
            expense(Category::Food, 450),
            Transaction::income(date(2), Category::Salary, Money::from_units(9_999), "").unwrap(),
        ];

        let breakdown = category_breakdown(&records, TransactionType::Expense);
        assert_eq!(
            breakdown,
            vec![
                (Category::Food, Money::from_units(550)),
                (Category::Transport, Money::from_units(500)),
            ]
        );

        let income = category_breakdown(&records, TransactionType::Income);
        assert_eq!(income, vec![(Category::Salary, Money::from_units(9_999))]);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let records = vec![
            expense(Category::Culture, 10),
            expense(Category::Utilities, 10),
            expense(Category::Shopping, 10),
        ];

        let categories: Vec<_> = category_breakdown(&records, TransactionType::Expense)
            .into_iter()
            .map(|(c, _)| c)
            .collect();
        assert_eq!(
            categories,
            vec![Category::Culture, Category::Utilities, Category::Shopping]
        );
    }

    #[test]
    fn test_other_split_by_type() {
        let records = vec![
            expense(Category::Other, 3),
            Transaction::income(date(1), Category::Other, Money::from_units(7), "").unwrap(),
        ];
        assert_eq!(
            category_breakdown(&records, TransactionType::Expense),
            vec![(Category::Other, Money::from_units(3))]
        );
        assert_eq!(
            category_breakdown(&records, TransactionType::Income),
            vec![(Category::Other, Money::from_units(7))]
        );
    }

    #[test]
    fn test_percentage_of() {
        assert_eq!(percentage_of(Money::from_units(25), Money::from_units(100)), 25.0);
        assert_eq!(percentage_of(Money::from_units(5), Money::zero()), 0.0);
    }

    fn record_strategy() -> impl Strategy<Value = Transaction> {
        let expense = proptest::sample::select(TransactionType::Expense.categories())
            .prop_map(|c| (TransactionType::Expense, c));
        let income = proptest::sample::select(TransactionType::Income.categories())
            .prop_map(|c| (TransactionType::Income, c));

        (prop_oneof![expense, income], 1i64..1_000_000).prop_map(|((kind, category), cents)| {
            Transaction::new(date(1), kind, category, Money::from_cents(cents), None).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_breakdown_sums_match_totals(records in proptest::collection::vec(record_strategy(), 0..60)) {
            let expense: Money = category_breakdown(&records, TransactionType::Expense)
                .iter()
                .map(|(_, m)| *m)
                .sum();
            let income: Money = category_breakdown(&records, TransactionType::Income)
                .iter()
                .map(|(_, m)| *m)
                .sum();

            prop_assert_eq!(expense, total_expense(&records));
            prop_assert_eq!(income, total_income(&records));
        }

        #[test]
        fn prop_breakdown_sorted_descending(records in proptest::collection::vec(record_strategy(), 0..60)) {
            let breakdown = category_breakdown(&records, TransactionType::Expense);
            for pair in breakdown.windows(2) {
                prop_assert!(pair[0].1 >= pair[1].1);
            }
        }
    }
}
