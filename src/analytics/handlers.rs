//! Analytics HTTP handler and view rendering.
//!
//! Fetches the transaction ledger, derives the summary and breakdowns with
//! the pure aggregation functions, and renders the cards, the category chart
//! and the category-wise lists.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;

use crate::{
    AppState, Error,
    analytics::{
        aggregation::{
            DEFAULT_PROFIT_FORMULA, category_amounts, compute_category_breakdown, compute_summary,
        },
        cards::{BarColor, category_analysis_view, transaction_count_card, turnover_card},
        charts::{AnalyticsChart, category_chart, chart_script, chart_view},
    },
    endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
    transaction::{Transaction, TransactionKind, get_all_transactions},
};

/// The state needed for displaying the analytics page.
#[derive(Debug, Clone)]
pub struct AnalyticsState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for AnalyticsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Display a page with summary statistics and breakdowns of the ledger.
pub async fn get_analytics_page(State(state): State<AnalyticsState>) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let nav_bar = NavBar::new(endpoints::ANALYTICS_VIEW);

    let transactions = get_all_transactions(&connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;

    if transactions.is_empty() {
        return Ok(analytics_no_data_view(nav_bar).into_response());
    }

    Ok(analytics_view(nav_bar, &transactions).into_response())
}

fn analytics_view(nav_bar: NavBar, transactions: &[Transaction]) -> Markup {
    let summary = compute_summary(transactions, DEFAULT_PROFIT_FORMULA);
    let breakdown = compute_category_breakdown(transactions);
    let income_amounts = category_amounts(transactions, TransactionKind::Income);
    let expense_amounts = category_amounts(transactions, TransactionKind::Expense);

    let chart = AnalyticsChart {
        id: "category-chart",
        options: category_chart(&breakdown).to_string(),
    };

    let content = html! {
        (nav_bar.into_html())

        div class=(PAGE_CONTAINER_STYLE) {
            div class="w-full max-w-5xl" {
                h2 class="text-2xl font-bold mb-4" { "Analytics" }

                div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-4" {
                    (transaction_count_card(&summary))
                    (turnover_card(&summary))
                }

                (chart_view(&chart))

                div class="grid grid-cols-1 md:grid-cols-2 gap-4" {
                    (category_analysis_view(
                        "Income - Category Wise",
                        &income_amounts,
                        summary.income_turnover,
                        BarColor::Green,
                    ))
                    (category_analysis_view(
                        "Expense - Category Wise",
                        &expense_amounts,
                        summary.expense_turnover,
                        BarColor::Red,
                    ))
                }
            }
        }
    };

    let head_elements = [
        HeadElement::ScriptLink("/static/echarts-5.5-min.js".to_owned()),
        chart_script(&chart),
    ];

    base("Analytics", &head_elements, &content)
}

fn analytics_no_data_view(nav_bar: NavBar) -> Markup {
    let content = html! {
        (nav_bar.into_html())

        div class=(PAGE_CONTAINER_STYLE) {
            div class="text-center mt-12" {
                h2 class="text-2xl font-bold mb-4" { "Nothing to analyse yet" }
                p class="mb-4" {
                    "Add your first transaction to see turnover, wage, tax and profit figures."
                }
                (link(endpoints::NEW_TRANSACTION_VIEW, "Add a transaction"))
            }
        }
    };

    base("Analytics", &[], &content)
}

#[cfg(test)]
mod analytics_page_tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use rusqlite::Connection;
    use scraper::Selector;
    use time::macros::date;

    use crate::{
        db::initialize,
        test_utils::{assert_valid_html, parse_html_document},
        transaction::{NewTransaction, TransactionKind, create_transaction},
    };

    use super::{AnalyticsState, get_analytics_page};

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    fn get_test_state(conn: Connection) -> AnalyticsState {
        AnalyticsState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    fn insert_transaction(amount: f64, kind: TransactionKind, category: &str, conn: &Connection) {
        create_transaction(
            NewTransaction {
                amount,
                kind,
                category: category.to_owned(),
                date: date!(2025 - 06 - 15),
            },
            conn,
        )
        .unwrap();
    }

    #[tokio::test]
    async fn analytics_page_loads_successfully() {
        let conn = get_test_connection();
        insert_transaction(100.0, TransactionKind::Income, "Sells", &conn);
        insert_transaction(40.0, TransactionKind::Expense, "Employee Salary", &conn);

        let response = get_analytics_page(State(get_test_state(conn)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        let chart_selector = Selector::parse("#category-chart").unwrap();
        assert!(
            html.select(&chart_selector).next().is_some(),
            "category chart container not found"
        );

        let progress_selector = Selector::parse("div[role='progressbar']").unwrap();
        assert!(
            html.select(&progress_selector).count() >= 4,
            "expected progress bars for counts, turnover and categories"
        );
    }

    #[tokio::test]
    async fn analytics_page_shows_summary_figures() {
        let conn = get_test_connection();
        insert_transaction(100.0, TransactionKind::Income, "Sells", &conn);
        insert_transaction(40.0, TransactionKind::Expense, "Employee Salary", &conn);

        let response = get_analytics_page(State(get_test_state(conn)))
            .await
            .unwrap();
        let html = parse_html_document(response).await;
        let text = html.html();

        assert!(text.contains("Total Transactions: 2"));
        assert!(text.contains("Wages: $40.00"));
        assert!(text.contains("Taxes (10% of income): $10.00"));
        assert!(text.contains("Profit: $10.00"));
    }

    #[tokio::test]
    async fn displays_prompt_text_on_no_data() {
        let conn = get_test_connection();

        let response = get_analytics_page(State(get_test_state(conn)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html_document(response).await;
        assert_valid_html(&html);

        assert!(html.html().contains("Nothing to analyse yet"));

        let chart_selector = Selector::parse("#category-chart").unwrap();
        assert!(
            html.select(&chart_selector).next().is_none(),
            "no chart should render without data"
        );
    }

    #[tokio::test]
    async fn unknown_category_never_reaches_breakdown_lists() {
        let conn = get_test_connection();
        insert_transaction(100.0, TransactionKind::Income, "Sells", &conn);
        insert_transaction(30.0, TransactionKind::Expense, "Petty Cash", &conn);

        let response = get_analytics_page(State(get_test_state(conn)))
            .await
            .unwrap();
        let html = parse_html_document(response).await;
        let text = html.html();

        // Counted in the totals...
        assert!(text.contains("Total Transactions: 2"));
        assert!(text.contains("Expense: $30.00"));
        // ...but absent from any category breakdown.
        assert!(!text.contains("Petty Cash"));
    }
}
