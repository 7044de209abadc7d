//! Card components for the analytics page.
//!
//! Renders the transaction-count card, the turnover card (income, expenses,
//! wages, taxes and profit) and the category-wise analysis lists, each with
//! percentage progress bars.

use maud::{Markup, html};

use crate::{
    analytics::aggregation::{Summary, percentage},
    category::Category,
    html::format_currency,
};

const CARD_STYLE: &str = "bg-white dark:bg-gray-800 border border-gray-200 \
    dark:border-gray-700 rounded-lg p-4 shadow-md flex flex-col";

const CARD_LINE_STYLE: &str = "text-sm text-gray-700 dark:text-gray-300 mb-1";

/// Renders the card showing total, income and expense transaction counts.
///
/// The progress bars show each kind's share of the total count. With an
/// empty ledger both bars render at 0%.
pub(super) fn transaction_count_card(summary: &Summary) -> Markup {
    let total = summary.transaction_count as f64;
    let income_percent = percentage(summary.income_count as f64, total);
    let expense_percent = percentage(summary.expense_count as f64, total);

    html! {
        div class=(CARD_STYLE) {
            h4 class="text-lg font-semibold mb-3" {
                "Total Transactions: " (summary.transaction_count)
            }

            div class=(CARD_LINE_STYLE) { "Income: " (summary.income_count) }
            div class=(CARD_LINE_STYLE) { "Expense: " (summary.expense_count) }

            div class="mt-3 space-y-2" {
                (labelled_progress_bar("Income share", income_percent, BarColor::Green))
                (labelled_progress_bar("Expense share", expense_percent, BarColor::Red))
            }
        }
    }
}

/// Renders the card showing turnover, wages, taxes and profit.
///
/// The progress bars show each turnover's share of the combined turnover,
/// resolving to 0% when there is no turnover at all.
pub(super) fn turnover_card(summary: &Summary) -> Markup {
    let combined_turnover = summary.income_turnover + summary.expense_turnover;
    let income_percent = percentage(summary.income_turnover, combined_turnover);
    let expense_percent = percentage(summary.expense_turnover, combined_turnover);

    html! {
        div class=(CARD_STYLE) {
            h4 class="text-lg font-semibold mb-3" { "Total Turnover" }

            div class=(CARD_LINE_STYLE) {
                "Income: " (format_currency(summary.income_turnover))
            }
            div class=(CARD_LINE_STYLE) {
                "Expense: " (format_currency(summary.expense_turnover))
            }
            div class=(CARD_LINE_STYLE) {
                "Wages: " (format_currency(summary.wages))
            }
            div class=(CARD_LINE_STYLE) {
                "Taxes (10% of income): " (format_currency(summary.taxes))
            }
            div class="text-sm font-semibold mb-1" {
                "Profit: " (format_currency(summary.profit))
            }

            div class="mt-3 space-y-2" {
                (labelled_progress_bar("Income turnover", income_percent, BarColor::Green))
                (labelled_progress_bar("Expense turnover", expense_percent, BarColor::Red))
            }
        }
    }
}

/// Renders a category-wise analysis list for one transaction kind.
///
/// `amounts` must already be filtered to positive amounts in fixed category
/// order; each entry gets a progress bar showing its share of `turnover`.
pub(super) fn category_analysis_view(
    title: &str,
    amounts: &[(Category, f64)],
    turnover: f64,
    color: BarColor,
) -> Markup {
    html! {
        div class=(CARD_STYLE) {
            h4 class="text-lg font-semibold mb-3" { (title) }

            @if amounts.is_empty() {
                p class="text-sm text-gray-600 dark:text-gray-400" {
                    "No transactions in this group yet."
                }
            }

            @for (category, amount) in amounts {
                div class="mb-3" {
                    div class="flex justify-between text-sm mb-1" {
                        span { (category) }
                        span { (format_currency(*amount)) }
                    }
                    (progress_bar(percentage(*amount, turnover), color))
                }
            }
        }
    }
}

/// The fill colour of a progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum BarColor {
    /// Used for income figures.
    Green,
    /// Used for expense figures.
    Red,
}

impl BarColor {
    fn fill_class(self) -> &'static str {
        match self {
            BarColor::Green => "bg-green-600 dark:bg-green-500 h-2.5 rounded-full transition-all",
            BarColor::Red => "bg-red-600 dark:bg-red-500 h-2.5 rounded-full transition-all",
        }
    }
}

fn labelled_progress_bar(label: &str, percent: i64, color: BarColor) -> Markup {
    html! {
        div {
            div class="flex justify-between text-xs text-gray-600 dark:text-gray-400 mb-1" {
                span { (label) }
                span { (percent) "%" }
            }
            (progress_bar(percent, color))
        }
    }
}

/// Renders a horizontal progress bar for a whole-number percentage.
fn progress_bar(percent: i64, color: BarColor) -> Markup {
    let clamped = percent.clamp(0, 100);

    // Ensure minimum 3% width so rounded corners are visible
    let display_percentage = if clamped > 0 && clamped < 3 {
        3
    } else {
        clamped
    };

    html! {
        div
            class="w-full bg-gray-200 dark:bg-gray-700 rounded-full h-2.5"
            role="progressbar"
            aria-valuenow=(clamped)
            aria-valuemin="0"
            aria-valuemax="100"
        {
            @if clamped > 0 {
                div
                    class=(color.fill_class())
                    style=(format!("width: {display_percentage}%"))
                {}
            }
        }
    }
}
