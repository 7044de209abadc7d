//! Chart generation and rendering for the analytics page.
//!
//! Builds an ECharts bar chart of income and expense amounts per category,
//! serialized to JSON configuration and hydrated with a small JavaScript
//! bootstrap in the page head.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, Tooltip, Trigger,
    },
    series::bar,
};
use maud::{Markup, PreEscaped, html};

use crate::{analytics::aggregation::CategoryBreakdown, html::HeadElement};

/// An analytics chart with its HTML container ID and ECharts configuration.
pub(super) struct AnalyticsChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML container for an analytics chart.
pub(super) fn chart_view(chart: &AnalyticsChart) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div
                id=(chart.id)
                class="min-h-[380px] rounded dark:bg-gray-100"
            {}
        }
    )
}

/// Generates JavaScript initialization code for an analytics chart.
///
/// Creates a script that initializes the ECharts instance with dark mode
/// support and responsive resizing.
pub(super) fn chart_script(chart: &AnalyticsChart) -> HeadElement {
    let script_content = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{}");
            const chart = echarts.init(chartDom);
            const option = {};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                const isDarkMode = darkModeMediaQuery.matches;
                chart.setTheme(isDarkMode ? 'dark' : 'default');
            }}
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }})();"#,
        chart.id, chart.options
    );

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Builds the income and expense by category bar chart.
///
/// One bar pair per breakdown entry, in the fixed category order the
/// breakdown already carries.
pub(super) fn category_chart(breakdown: &[CategoryBreakdown]) -> Chart {
    let labels: Vec<String> = breakdown
        .iter()
        .map(|entry| entry.category.to_string())
        .collect();
    let income_values: Vec<f64> = breakdown.iter().map(|entry| entry.income).collect();
    let expense_values: Vec<f64> = breakdown.iter().map(|entry| entry.expense).collect();

    Chart::new()
        .title(
            Title::new()
                .text("Income and Expense by Category")
                .left(20)
                .top("1%"),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().left(250).top("1%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .top(90)
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            bar::Bar::new()
                .name("Income")
                .item_style(ItemStyle::new().color("green"))
                .data(income_values),
        )
        .series(
            bar::Bar::new()
                .name("Expense")
                .item_style(ItemStyle::new().color("red"))
                .data(expense_values),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
