//! Pure aggregation functions over the transaction ledger.
//!
//! Everything in this module is deterministic and side-effect free: the same
//! slice of transactions always produces the same summary and breakdowns.
//! All derived figures are recomputed from scratch on every call, nothing is
//! cached.

use std::collections::HashMap;

use crate::{
    category::Category,
    transaction::{Transaction, TransactionKind},
};

/// The flat tax rate applied to income turnover.
///
/// This is a fixed business rule carried over from the original ledger, not
/// a configurable setting.
pub(super) const TAX_RATE: f64 = 0.10;

/// How profit is derived from the other summary figures.
///
/// The original ledger subtracted wages on top of the expense turnover even
/// though wages are themselves expenses, so they were counted twice. That
/// behaviour is preserved as the default rather than silently corrected; the
/// alternative formula exists so the choice is explicit and visible to
/// stakeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ProfitFormula {
    /// income − (expenses + wages + taxes), matching the original ledger.
    ///
    /// Wages are a subset of the expense turnover, so this formula subtracts
    /// wage expenses twice.
    LegacyDoubleWages,
    /// income − (expenses + taxes), counting wages once as part of expenses.
    #[allow(dead_code)]
    NetOfExpensesAndTaxes,
}

/// The profit formula used by the analytics page.
pub(super) const DEFAULT_PROFIT_FORMULA: ProfitFormula = ProfitFormula::LegacyDoubleWages;

/// The full set of derived aggregate figures for a transaction collection.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Summary {
    /// How many transactions were aggregated.
    pub(super) transaction_count: usize,
    /// How many of them are income.
    pub(super) income_count: usize,
    /// How many of them are expenses.
    pub(super) expense_count: usize,
    /// The sum of all income amounts.
    pub(super) income_turnover: f64,
    /// The sum of all expense amounts.
    pub(super) expense_turnover: f64,
    /// The sum of expense amounts in the Employee Salary category.
    pub(super) wages: f64,
    /// [TAX_RATE] of the income turnover.
    pub(super) taxes: f64,
    /// Profit derived according to the chosen [ProfitFormula].
    pub(super) profit: f64,
}

/// Compute the summary figures for `transactions`.
///
/// An empty slice produces a summary where every field is zero; no field is
/// ever NaN or infinite.
pub(super) fn compute_summary(transactions: &[Transaction], formula: ProfitFormula) -> Summary {
    let mut income_count = 0;
    let mut expense_count = 0;
    let mut income_turnover = 0.0;
    let mut expense_turnover = 0.0;
    let mut wages = 0.0;

    for transaction in transactions {
        match transaction.kind {
            TransactionKind::Income => {
                income_count += 1;
                income_turnover += transaction.amount;
            }
            TransactionKind::Expense => {
                expense_count += 1;
                expense_turnover += transaction.amount;

                if transaction.category == Category::EmployeeSalary.as_str() {
                    wages += transaction.amount;
                }
            }
        }
    }

    let taxes = income_turnover * TAX_RATE;
    let profit = match formula {
        ProfitFormula::LegacyDoubleWages => income_turnover - (expense_turnover + wages + taxes),
        ProfitFormula::NetOfExpensesAndTaxes => income_turnover - (expense_turnover + taxes),
    };

    Summary {
        transaction_count: transactions.len(),
        income_count,
        expense_count,
        income_turnover,
        expense_turnover,
        wages,
        taxes,
        profit,
    }
}

/// The per-category split of income and expense amounts.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct CategoryBreakdown {
    /// The category this entry belongs to.
    pub(super) category: Category,
    /// The summed income amounts for this category.
    pub(super) income: f64,
    /// The summed expense amounts for this category.
    pub(super) expense: f64,
}

/// Compute the income/expense breakdown for each known category.
///
/// Entries are returned in the fixed [Category::ALL] order, not sorted by
/// amount. Categories where both amounts are zero are dropped, and
/// transactions with labels outside the known set never appear here.
pub(super) fn compute_category_breakdown(transactions: &[Transaction]) -> Vec<CategoryBreakdown> {
    let mut totals: HashMap<Category, (f64, f64)> = HashMap::new();

    for transaction in transactions {
        let Some(category) = Category::from_label(&transaction.category) else {
            continue;
        };

        let entry = totals.entry(category).or_insert((0.0, 0.0));
        match transaction.kind {
            TransactionKind::Income => entry.0 += transaction.amount,
            TransactionKind::Expense => entry.1 += transaction.amount,
        }
    }

    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let (income, expense) = totals.get(&category).copied()?;

            (income > 0.0 || expense > 0.0).then_some(CategoryBreakdown {
                category,
                income,
                expense,
            })
        })
        .collect()
}

/// Compute the summed amount per known category for one transaction kind.
///
/// Used by the category-wise analysis lists. Entries are in the fixed
/// [Category::ALL] order and zero-amount categories are dropped.
pub(super) fn category_amounts(
    transactions: &[Transaction],
    kind: TransactionKind,
) -> Vec<(Category, f64)> {
    compute_category_breakdown(transactions)
        .into_iter()
        .filter_map(|breakdown| {
            let amount = match kind {
                TransactionKind::Income => breakdown.income,
                TransactionKind::Expense => breakdown.expense,
            };

            (amount > 0.0).then_some((breakdown.category, amount))
        })
        .collect()
}

/// The share of `part` in `whole` as a whole-number percentage.
///
/// Rounds to the nearest integer. A zero (or negative) denominator resolves
/// to 0 rather than propagating NaN or infinity to the views.
pub(super) fn percentage(part: f64, whole: f64) -> i64 {
    if whole <= 0.0 {
        return 0;
    }

    ((part / whole) * 100.0).round() as i64
}

#[cfg(test)]
mod aggregation_tests {
    use time::macros::date;

    use crate::transaction::{Transaction, TransactionKind};

    use super::{
        CategoryBreakdown, ProfitFormula, compute_category_breakdown, compute_summary, percentage,
    };
    use crate::category::Category;

    fn create_test_transaction(amount: f64, kind: TransactionKind, category: &str) -> Transaction {
        Transaction {
            id: 0,
            amount,
            kind,
            category: category.to_owned(),
            date: date!(2025 - 06 - 15),
        }
    }

    #[test]
    fn summary_matches_worked_example() {
        // 100 income (Sells) and 40 expense (Employee Salary):
        // taxes = 10% of 100 = 10, profit = 100 - (40 + 40 + 10) = 10.
        let transactions = vec![
            create_test_transaction(100.0, TransactionKind::Income, "Sells"),
            create_test_transaction(40.0, TransactionKind::Expense, "Employee Salary"),
        ];

        let summary = compute_summary(&transactions, ProfitFormula::LegacyDoubleWages);

        assert_eq!(summary.transaction_count, 2);
        assert_eq!(summary.income_count, 1);
        assert_eq!(summary.expense_count, 1);
        assert_eq!(summary.income_turnover, 100.0);
        assert_eq!(summary.expense_turnover, 40.0);
        assert_eq!(summary.wages, 40.0);
        assert_eq!(summary.taxes, 10.0);
        assert_eq!(summary.profit, 10.0);
    }

    #[test]
    fn alternative_formula_counts_wages_once() {
        let transactions = vec![
            create_test_transaction(100.0, TransactionKind::Income, "Sells"),
            create_test_transaction(40.0, TransactionKind::Expense, "Employee Salary"),
        ];

        let summary = compute_summary(&transactions, ProfitFormula::NetOfExpensesAndTaxes);

        // profit = 100 - (40 + 10) = 50.
        assert_eq!(summary.profit, 50.0);
    }

    #[test]
    fn empty_ledger_produces_all_zeroes() {
        let summary = compute_summary(&[], ProfitFormula::LegacyDoubleWages);

        assert_eq!(summary.transaction_count, 0);
        assert_eq!(summary.income_count, 0);
        assert_eq!(summary.expense_count, 0);
        assert_eq!(summary.income_turnover, 0.0);
        assert_eq!(summary.expense_turnover, 0.0);
        assert_eq!(summary.wages, 0.0);
        assert_eq!(summary.taxes, 0.0);
        assert_eq!(summary.profit, 0.0);
        assert!(!summary.profit.is_nan());
    }

    #[test]
    fn turnovers_sum_to_total_of_all_amounts() {
        let transactions = vec![
            create_test_transaction(100.0, TransactionKind::Income, "Sells"),
            create_test_transaction(25.5, TransactionKind::Income, "Other Income"),
            create_test_transaction(40.0, TransactionKind::Expense, "Employee Salary"),
            create_test_transaction(12.5, TransactionKind::Expense, "Petty Cash"),
        ];

        let summary = compute_summary(&transactions, ProfitFormula::LegacyDoubleWages);
        let total: f64 = transactions.iter().map(|t| t.amount).sum();

        assert_eq!(summary.income_turnover + summary.expense_turnover, total);
    }

    #[test]
    fn unknown_category_counts_in_totals_but_not_breakdown() {
        let transactions = vec![
            create_test_transaction(100.0, TransactionKind::Income, "Sells"),
            create_test_transaction(30.0, TransactionKind::Expense, "Petty Cash"),
        ];

        let summary = compute_summary(&transactions, ProfitFormula::LegacyDoubleWages);
        assert_eq!(summary.expense_turnover, 30.0);
        assert_eq!(summary.transaction_count, 2);

        let breakdown = compute_category_breakdown(&transactions);
        assert_eq!(
            breakdown,
            vec![CategoryBreakdown {
                category: Category::Sells,
                income: 100.0,
                expense: 0.0
            }]
        );
    }

    #[test]
    fn wages_only_count_expense_salary() {
        // An income transaction mislabelled as Employee Salary must not count
        // towards wages.
        let transactions = vec![
            create_test_transaction(500.0, TransactionKind::Income, "Employee Salary"),
            create_test_transaction(200.0, TransactionKind::Expense, "Employee Salary"),
        ];

        let summary = compute_summary(&transactions, ProfitFormula::LegacyDoubleWages);

        assert_eq!(summary.wages, 200.0);
    }

    #[test]
    fn breakdown_preserves_fixed_category_order() {
        // Insert in reverse of the display order.
        let transactions = vec![
            create_test_transaction(10.0, TransactionKind::Income, "Sells"),
            create_test_transaction(20.0, TransactionKind::Expense, "Building Rent"),
            create_test_transaction(30.0, TransactionKind::Expense, "Raw Material"),
        ];

        let breakdown = compute_category_breakdown(&transactions);
        let categories: Vec<_> = breakdown.iter().map(|b| b.category).collect();

        assert_eq!(
            categories,
            vec![
                Category::RawMaterial,
                Category::BuildingRent,
                Category::Sells
            ]
        );
    }

    #[test]
    fn breakdown_drops_zero_only_categories() {
        let transactions = vec![
            create_test_transaction(0.0, TransactionKind::Income, "Sells"),
            create_test_transaction(10.0, TransactionKind::Expense, "Building Rent"),
        ];

        let breakdown = compute_category_breakdown(&transactions);

        assert_eq!(breakdown.len(), 1);
        assert_eq!(breakdown[0].category, Category::BuildingRent);
    }

    #[test]
    fn breakdown_merges_both_kinds_per_category() {
        let transactions = vec![
            create_test_transaction(100.0, TransactionKind::Income, "Machine Equipment"),
            create_test_transaction(60.0, TransactionKind::Expense, "Machine Equipment"),
            create_test_transaction(40.0, TransactionKind::Expense, "Machine Equipment"),
        ];

        let breakdown = compute_category_breakdown(&transactions);

        assert_eq!(
            breakdown,
            vec![CategoryBreakdown {
                category: Category::MachineEquipment,
                income: 100.0,
                expense: 100.0
            }]
        );
    }

    #[test]
    fn aggregation_is_idempotent() {
        let transactions = vec![
            create_test_transaction(100.0, TransactionKind::Income, "Sells"),
            create_test_transaction(40.0, TransactionKind::Expense, "Employee Salary"),
            create_test_transaction(15.0, TransactionKind::Expense, "Transportation"),
        ];

        let first = compute_summary(&transactions, ProfitFormula::LegacyDoubleWages);
        let second = compute_summary(&transactions, ProfitFormula::LegacyDoubleWages);
        assert_eq!(first, second);

        let first = compute_category_breakdown(&transactions);
        let second = compute_category_breakdown(&transactions);
        assert_eq!(first, second);
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(percentage(1.0, 3.0), 33);
        assert_eq!(percentage(2.0, 3.0), 67);
        assert_eq!(percentage(1.0, 2.0), 50);
        assert_eq!(percentage(3.0, 3.0), 100);
        assert_eq!(percentage(0.0, 3.0), 0);
    }

    #[test]
    fn percentage_resolves_zero_denominator_to_zero() {
        assert_eq!(percentage(0.0, 0.0), 0);
        assert_eq!(percentage(42.0, 0.0), 0);
    }
}
