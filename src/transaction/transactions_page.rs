//! Defines the route handler for the page that lists every transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    dashboard::DashboardSlots,
    endpoints,
    html::{CARD_STYLE, FADE_IN_CLASS, PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
    transaction::{Transaction, TransactionStore, view::transaction_list_item},
};

/// The state needed for the transactions page.
#[derive(Clone)]
pub struct TransactionsViewState {
    /// The store to read transactions from.
    transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// Render every transaction, newest first, with a button to delete each one.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
) -> Result<Response, Error> {
    let store = state
        .transaction_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?;

    let mut transactions: Vec<&Transaction> = store.transactions().iter().collect();
    // Stable, so same-day transactions stay in the order they were added.
    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    Ok(transactions_view(&transactions, &DashboardSlots::default()).into_response())
}

fn transactions_view(transactions: &[&Transaction], slots: &DashboardSlots) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE) {
            div class="w-full max-w-3xl" {
                div class="flex items-center justify-between mb-4" {
                    h1 class="text-2xl font-bold" { "Transactions" }

                    a
                        href=(endpoints::EXPORT_TRANSACTIONS)
                        download
                        class="text-blue-600 hover:text-blue-500 dark:text-blue-500 dark:hover:text-blue-400 underline"
                    {
                        "Export JSON"
                    }
                }

                div class={(CARD_STYLE) " " (FADE_IN_CLASS)} {
                    @if transactions.is_empty() {
                        p class="py-6 text-center text-gray-500 dark:text-gray-400" {
                            "No transactions yet. Add one from the "
                            (link(endpoints::DASHBOARD_VIEW, "dashboard"))
                            "."
                        }
                    } @else {
                        ul id=(slots.transactions_list) class="divide-y divide-gray-200 dark:divide-gray-700" {
                            @for transaction in transactions {
                                (transaction_list_item(transaction))
                            }
                        }
                    }
                }
            }
        }
    };

    base("Transactions", &[], &content)
}
