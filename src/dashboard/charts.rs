//! Chart generation and rendering for the dashboard.
//!
//! This module creates interactive ECharts visualizations for the selected time range:
//! - **Expense Breakdown**: Doughnut chart of spending per category
//! - **Income vs Expenses**: Line chart over the trailing trend window
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, JsFunction, LineStyle,
        Tooltip, Trigger,
    },
    series::{Line, Pie},
};
use maud::PreEscaped;

use crate::{
    dashboard::{
        aggregation::{CategoryShare, TrendBucket},
        range::TimeRange,
    },
    html::HeadElement,
};

const INCOME_COLOR: &str = "#10B981";
const EXPENSE_COLOR: &str = "#EF4444";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Any chart already bound to a container is disposed of before a new one is
/// created, so re-running the script never stacks charts.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    if (!chartDom) {{
                        return;
                    }}

                    const existingChart = echarts.getInstanceByDom(chartDom);
                    if (existingChart) {{
                        existingChart.dispose();
                    }}

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
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

/// Doughnut chart of each category's share of spending.
pub(super) fn expense_chart(breakdown: &[CategoryShare]) -> Chart {
    let data: Vec<(f64, &str)> = breakdown
        .iter()
        .map(|share| (round_cents(share.amount), share.category.name()))
        .collect();

    let subtitle = if data.is_empty() {
        "No expenses in this period"
    } else {
        "Share of total expenses"
    };

    Chart::new()
        .title(Title::new().text("Expense Breakdown").subtext(subtitle))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Item)
                .formatter("{b}: {d}%"),
        )
        .legend(Legend::new().bottom("0%"))
        .series(
            Pie::new()
                .name("Expenses")
                .radius(vec!["40%", "70%"])
                .data(data),
        )
}

/// Line chart of income and expenses per trend bucket.
pub(super) fn trend_chart(trend: &[TrendBucket], range: TimeRange) -> Chart {
    let labels: Vec<String> = trend.iter().map(|bucket| bucket.label.clone()).collect();
    let income: Vec<f64> = trend.iter().map(|bucket| round_cents(bucket.income)).collect();
    let expenses: Vec<f64> = trend
        .iter()
        .map(|bucket| round_cents(bucket.expense))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Income vs Expenses")
                .subtext(trend_subtitle(range)),
        )
        .tooltip(currency_tooltip())
        .legend(Legend::new().bottom("0%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("10%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(
            Line::new()
                .name("Income")
                .item_style(ItemStyle::new().color(INCOME_COLOR))
                .line_style(LineStyle::new().color(INCOME_COLOR))
                .data(income),
        )
        .series(
            Line::new()
                .name("Expenses")
                .item_style(ItemStyle::new().color(EXPENSE_COLOR))
                .line_style(LineStyle::new().color(EXPENSE_COLOR))
                .data(expenses),
        )
}

fn trend_subtitle(range: TimeRange) -> &'static str {
    match range {
        TimeRange::Daily => "Last 7 days",
        TimeRange::Monthly => "Last 6 months",
        TimeRange::Yearly | TimeRange::All => "Last 5 years",
    }
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"$0.00\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Line))
}
