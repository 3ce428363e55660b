//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use crate::{Error, storage::KeyValueStorage, timezone::get_local_offset, transaction::TransactionStore};

/// The state of the REST server.
#[derive(Clone)]
pub struct AppState {
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,

    /// Every transaction, loaded from and saved to the key-value storage.
    pub transaction_store: Arc<Mutex<TransactionStore>>,
}

impl AppState {
    /// Create a new [AppState] and load the saved transactions from `storage`.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(storage: Box<dyn KeyValueStorage>, local_timezone: &str) -> Result<Self, Error> {
        if get_local_offset(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        let store = TransactionStore::open(storage);

        Ok(Self {
            local_timezone: local_timezone.to_owned(),
            transaction_store: Arc::new(Mutex::new(store)),
        })
    }
}
