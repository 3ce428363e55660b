//! Defines the endpoint for creating a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRefresh;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error,
    timezone::local_today,
    transaction::{Category, Transaction, TransactionStore, TransactionType, core::parse_amount},
};

/// The state needed to create a transaction.
#[derive(Clone)]
pub struct CreateTransactionState {
    /// The store that the new transaction is added to.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The form data for creating a transaction.
///
/// The amount and category are kept as text so that bad input is reported
/// to the user as an alert rather than a generic rejection.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// Whether the money was earned or spent.
    pub type_: TransactionType,
    /// The value of the transaction in dollars, as entered.
    pub amount: String,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// When the transaction occurred, today if not given.
    #[serde(default)]
    pub date: Option<Date>,
    /// The name of the category, as entered.
    #[serde(default)]
    pub category: String,
}

/// A route handler for creating a new transaction, refreshes the page on success.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let transaction = match validate_form(form, today) {
        Ok(transaction) => transaction,
        Err(error) => {
            tracing::debug!("Rejected transaction form: {error}");
            return error.into_alert_response();
        }
    };

    let mut store = match state.transaction_store.lock() {
        Ok(store) => store,
        Err(error) => {
            tracing::error!("could not acquire transaction store lock: {error}");
            return Error::StoreLockError.into_alert_response();
        }
    };

    if let Err(error) = store.add(transaction) {
        tracing::error!("could not create transaction: {error}");
        return error.into_alert_response();
    }

    (HxRefresh(true), StatusCode::OK).into_response()
}

/// Check the submitted fields and build the transaction.
///
/// # Errors
/// Returns an [Error::InvalidAmount], [Error::UnknownCategory],
/// [Error::CategoryMismatch] or [Error::FutureDate] describing the first bad field.
fn validate_form(form: TransactionForm, today: Date) -> Result<Transaction, Error> {
    let amount = parse_amount(&form.amount)?;
    let category: Category = form.category.parse()?;
    let date = form.date.unwrap_or(today);

    if date > today {
        return Err(Error::FutureDate(date));
    }

    Transaction::build(form.type_, amount, date, category)
        .description(&form.description)
        .finalize()
}
