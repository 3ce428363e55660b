//! Dashboard HTTP handler and view rendering.
//!
//! This module contains:
//! - The route handler for displaying the dashboard
//! - HTML view functions for laying out the dashboard UI
//! - State and query types used by the handler

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use time::Date;

use crate::{
    AppState, Error,
    dashboard::{
        cards::{category_overview_view, goals_view, summary_cards_view},
        charts::{DashboardChart, charts_script, expense_chart, trend_chart},
        model::DashboardModel,
        range::{TIME_RANGES, TimeRange},
        slots::DashboardSlots,
        tables::transactions_table,
    },
    endpoints,
    html::{
        BUTTON_SECONDARY_STYLE, CARD_STYLE, FADE_IN_CLASS, HeadElement, PAGE_CONTAINER_STYLE,
        base, dollar_input_styles,
    },
    navigation::NavBar,
    timezone::local_today,
    transaction::{
        TRANSACTION_MODALS, TransactionModal, TransactionStore, modal_script, open_modal_button,
        transaction_modal,
    },
};

const RANGE_BUTTON_STYLE: &str = "px-4 py-2 text-sm font-medium rounded border \
    border-gray-200 dark:border-gray-600 hover:bg-gray-100 dark:hover:bg-gray-700";
const RANGE_BUTTON_ACTIVE_STYLE: &str = "active bg-blue-600 text-white border-blue-600 \
    hover:bg-blue-700 dark:hover:bg-blue-700";
const CHART_CONTAINER_STYLE: &str = "min-h-[380px] rounded dark:bg-gray-100";

/// The state needed for displaying the dashboard page.
///
/// Contains the transaction store and timezone information required
/// by the dashboard handler.
#[derive(Clone)]
pub struct DashboardState {
    /// The store holding every transaction.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The query string for the dashboard page.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// The time range to summarise, daily if not given.
    #[serde(default)]
    pub range: TimeRange,
}

/// Display a page with an overview of the user's transactions for the
/// selected time range.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    let store = state
        .transaction_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    let model = DashboardModel::build(store.transactions(), query.range, today);
    drop(store);

    Ok(dashboard_view(&model, &DashboardSlots::default()).into_response())
}

/// Creates the dashboard charts from the model.
///
/// The chart options are serialized to JSON for ECharts consumption.
fn build_dashboard_charts(model: &DashboardModel, slots: &DashboardSlots) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: slots.expense_chart,
            options: expense_chart(&model.breakdown).to_string(),
        },
        DashboardChart {
            id: slots.trend_chart,
            options: trend_chart(&model.trend, model.range).to_string(),
        },
    ]
}

/// Today's date written out in full, e.g. "Tuesday, June 10, 2025".
fn long_date(date: Date) -> String {
    format!(
        "{}, {} {}, {}",
        date.weekday(),
        date.month(),
        date.day(),
        date.year()
    )
}

/// Links that reload the dashboard with another time range.
fn range_buttons(selected: TimeRange) -> Markup {
    html! {
        div class="flex flex-wrap gap-2" role="group" aria-label="Time range" {
            @for range in TIME_RANGES {
                @let is_selected = range == selected;
                @let style = if is_selected {
                    format!("{RANGE_BUTTON_STYLE} {RANGE_BUTTON_ACTIVE_STYLE}")
                } else {
                    RANGE_BUTTON_STYLE.to_owned()
                };

                a
                    href={(endpoints::DASHBOARD_VIEW) "?range=" (range.as_str())}
                    class=(style)
                    aria-current=[is_selected.then_some("true")]
                {
                    (range.label())
                }
            }
        }
    }
}

/// Renders the main dashboard page with cards, charts and the transactions table.
fn dashboard_view(model: &DashboardModel, slots: &DashboardSlots) -> Markup {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW).into_html();
    let charts = build_dashboard_charts(model, slots);

    let content = html!(
        (nav_bar)

        div id="dashboard-content" class=(PAGE_CONTAINER_STYLE)
        {
            header class="w-full mb-6 flex flex-col gap-4 md:flex-row md:items-end md:justify-between"
            {
                div {
                    h1 class="text-2xl font-bold" { "Dashboard" }
                    p id=(slots.current_date) class="text-gray-500 dark:text-gray-400" {
                        (long_date(model.today))
                    }
                }

                div class="flex flex-wrap gap-2" {
                    @for modal in TRANSACTION_MODALS {
                        @let style = if modal == TransactionModal::Transaction {
                            BUTTON_SECONDARY_STYLE
                        } else {
                            "px-4 py-2 bg-blue-500 hover:bg-blue-600 text-white rounded"
                        };

                        (open_modal_button(modal, style))
                    }
                }
            }

            div class="w-full mb-6" {
                (range_buttons(model.range))
            }

            (summary_cards_view(&model.totals, slots))

            section id="charts" class="w-full grid grid-cols-1 xl:grid-cols-2 gap-4 mb-6"
            {
                @for chart in &charts {
                    div class={(CARD_STYLE) " " (FADE_IN_CLASS)} {
                        div id=(chart.id) class=(CHART_CONTAINER_STYLE) {}
                    }
                }
            }

            section class="w-full grid grid-cols-1 lg:grid-cols-2 gap-4 mb-6"
            {
                (category_overview_view(&model.overview, slots))
                (goals_view(&model.goals, slots))
            }

            (transactions_table(&model.transactions, slots))
        }

        @for modal in TRANSACTION_MODALS {
            (transaction_modal(modal, model.today))
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(&charts),
        modal_script(),
        dollar_input_styles(),
    ];

    base("Dashboard", &scripts, &content)
}
