//! Card components for the dashboard: the summary figures, the spending
//! share of each category and the daily goals.

use maud::{Markup, html};

use crate::{
    dashboard::{
        aggregation::{CategoryShare, Totals},
        goals::Goal,
        slots::DashboardSlots,
    },
    html::{CARD_STYLE, FADE_IN_CLASS, format_currency, format_percentage},
};

const CARD_LABEL_STYLE: &str = "text-sm font-medium text-gray-500 dark:text-gray-400";
const CARD_VALUE_STYLE: &str = "mt-1 text-2xl font-semibold";
const PROGRESS_TRACK_STYLE: &str = "w-full h-2 rounded-full bg-gray-200 dark:bg-gray-700";
const PROGRESS_FILL_STYLE: &str = "h-2 rounded-full bg-blue-600 dark:bg-blue-500";

/// Renders one summary figure.
fn summary_card(label: &str, value_id: &str, value: f64, value_style: &str) -> Markup {
    html! {
        div class=(CARD_STYLE) {
            p class=(CARD_LABEL_STYLE) { (label) }
            p id=(value_id) class={(CARD_VALUE_STYLE) " " (value_style) " " (FADE_IN_CLASS)} {
                (format_currency(value))
            }
        }
    }
}

/// Renders the income, expenses, balance and savings cards.
pub(super) fn summary_cards_view(totals: &Totals, slots: &DashboardSlots) -> Markup {
    // Compare whole cents so float drift around zero is not shown as a deficit.
    let balance_style = if (totals.balance() * 100.0).round() < 0.0 {
        "text-red-600 dark:text-red-400"
    } else {
        "text-gray-900 dark:text-white"
    };

    html! {
        section
            id=(slots.summary_cards)
            class="w-full grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-5 gap-4 mb-6"
        {
            (summary_card("Income", slots.income_value, totals.income, "text-green-600 dark:text-green-400"))
            (summary_card("Expenses", slots.expenses_value, totals.expenses, "text-red-600 dark:text-red-400"))
            (summary_card("Balance", slots.balance_value, totals.balance(), balance_style))
            (summary_card("Estimated Savings (20%)", slots.savings_value, totals.estimated_savings(), "text-blue-600 dark:text-blue-400"))
            (summary_card("Net Savings", slots.net_savings_value, totals.net_savings(), balance_style))
        }
    }
}

/// A labelled progress bar, `percentage` is clamped to `0..=100` for the bar width.
fn progress_bar(label: &str, detail: &str, percentage: f64) -> Markup {
    let width = percentage.clamp(0.0, 100.0);

    html! {
        div class="mb-4" {
            div class="flex justify-between mb-1 text-sm" {
                span class="font-medium" { (label) }
                span class="text-gray-500 dark:text-gray-400" { (detail) }
            }
            div class=(PROGRESS_TRACK_STYLE) {
                div class=(PROGRESS_FILL_STYLE) style=(format!("width: {width:.0}%")) {}
            }
        }
    }
}

/// Renders every expense category's share of spending as progress bars.
pub(super) fn category_overview_view(overview: &[CategoryShare], slots: &DashboardSlots) -> Markup {
    html! {
        div class=(CARD_STYLE) {
            h3 class="text-lg font-semibold mb-4" { "Spending by Category" }

            div id=(slots.category_overview) class=(FADE_IN_CLASS) {
                @for share in overview {
                    (progress_bar(
                        share.category.name(),
                        &format_percentage(share.percentage),
                        share.percentage,
                    ))
                }
            }
        }
    }
}

/// Renders today's goals with their progress.
pub(super) fn goals_view(goals: &[Goal], slots: &DashboardSlots) -> Markup {
    html! {
        div class=(CARD_STYLE) {
            h3 class="text-lg font-semibold mb-4" { "Daily Goals" }

            div id=(slots.goals_list) class=(FADE_IN_CLASS) {
                @for goal in goals {
                    (progress_bar(
                        goal.title,
                        &format!("{}/{}", format_currency(goal.current), format_currency(goal.target)),
                        goal.progress_percentage(),
                    ))
                }
            }
        }
    }
}
