//! Spendboard is a web app for tracking personal income and expenses.
//!
//! Transactions are kept in a local key-value store and summarised on a
//! dashboard with totals, an expense breakdown, a trend chart and a handful
//! of daily goals. This library provides a REST API that directly serves HTML
//! pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use time::Date;
use tokio::signal;

mod alert;
mod app_state;
mod dashboard;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod storage;
mod timezone;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use logging::{add_tracing_layer, setup_logging};
pub use routing::build_router;
pub use storage::{KeyValueStorage, MemoryStorage, SqliteStorage};
pub use timezone::get_local_offset;
pub use transaction::{
    Category, Transaction, TransactionBuilder, TransactionId, TransactionStore, TransactionType,
};

use crate::{
    alert::Alert,
    internal_server_error::{InternalServerErrorPage, render_internal_server_error},
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The amount entered for a transaction was not a finite number greater
    /// than zero.
    ///
    /// Callers should pass in the original text the user entered.
    #[error("\"{0}\" is not a valid amount")]
    InvalidAmount(String),

    /// The category text did not match any known category.
    #[error("\"{0}\" is not a known category")]
    UnknownCategory(String),

    /// The category belongs to the other transaction type, e.g. "Salary" on
    /// an expense.
    #[error("{category} is not a valid category for {transaction_type} transactions")]
    CategoryMismatch {
        /// The category that was chosen.
        category: Category,
        /// The type of transaction the category was used with.
        transaction_type: TransactionType,
    },

    /// A date in the future was used to create a transaction.
    ///
    /// Transactions record events that have already happened, therefore future
    /// dates are not allowed.
    #[error("{0} is a date in the future, which is not allowed")]
    FutureDate(Date),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The lock guarding the transaction store was poisoned.
    #[error("could not acquire the transaction store lock")]
    StoreLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// An error occurred while serializing the transactions as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", value);
        Error::SqlError(value)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => {
                render_internal_server_error(InternalServerErrorPage {
                    description: "Invalid Timezone Settings",
                    fix: &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                })
            }
            Error::StoreLockError => render_internal_server_error(Default::default()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(Default::default())
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid amount",
                    &format!(
                        "\"{amount}\" is not a valid amount. Enter an amount between $0.01 and \
                         $1,000,000,000 with at most two decimal places, e.g. 12.50."
                    ),
                )
                .into_html(),
            )
                .into_response(),
            Error::UnknownCategory(category) if category.trim().is_empty() => (
                StatusCode::BAD_REQUEST,
                Alert::error("Missing category", "Select a category for the transaction.")
                    .into_html(),
            )
                .into_response(),
            Error::UnknownCategory(category) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Unknown category",
                    &format!("\"{category}\" is not one of the available categories."),
                )
                .into_html(),
            )
                .into_response(),
            Error::CategoryMismatch {
                category,
                transaction_type,
            } => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid category",
                    &format!(
                        "{category} cannot be used for {transaction_type} transactions. \
                        Pick one of the {transaction_type} categories instead."
                    ),
                )
                .into_html(),
            )
                .into_response(),
            Error::FutureDate(date) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid transaction date",
                    &format!(
                        "{date} is a date in the future, which is not allowed. \
                        Change the date to today or earlier."
                    ),
                )
                .into_html(),
            )
                .into_response(),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::error(
                    "Invalid Timezone Settings",
                    &format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                )
                .into_html(),
            )
                .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::error(
                        "Something went wrong",
                        "An unexpected error occurred, check the server logs for more details.",
                    )
                    .into_html(),
                )
                    .into_response()
            }
        }
    }
}
