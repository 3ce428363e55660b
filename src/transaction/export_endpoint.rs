//! Lets the user download every transaction as a JSON file.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};

use crate::{AppState, Error, transaction::TransactionStore};

/// The name the browser saves the export as.
const EXPORT_FILE_NAME: &str = "transactions.json";

/// The state needed to export transactions.
#[derive(Clone)]
pub struct ExportTransactionsState {
    transaction_store: Arc<Mutex<TransactionStore>>,
}

impl FromRef<AppState> for ExportTransactionsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            transaction_store: state.transaction_store.clone(),
        }
    }
}

/// A route handler that responds with the stored transactions as a JSON
/// attachment, in the same format they are saved in.
pub async fn export_transactions_endpoint(
    State(state): State<ExportTransactionsState>,
) -> Result<Response, Error> {
    let json = state
        .transaction_store
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire transaction store lock: {error}"))
        .map_err(|_| Error::StoreLockError)?
        .to_json()
        .inspect_err(|error| tracing::error!("could not export transactions: {error}"))?;

    Ok((
        [
            (CONTENT_TYPE, "application/json".to_owned()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        json,
    )
        .into_response())
}
