//! The in-memory list of transactions, mirrored to key-value storage.

use crate::{
    Error,
    storage::KeyValueStorage,
    transaction::{Transaction, TransactionId},
};

/// The key that the full transaction list is stored under.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Holds every transaction in insertion order and writes the whole list back
/// to storage after each mutation.
pub struct TransactionStore {
    storage: Box<dyn KeyValueStorage>,
    transactions: Vec<Transaction>,
}

impl TransactionStore {
    /// Create a store and load the transactions saved in `storage`.
    ///
    /// A missing or unparsable record is treated as an empty list, and saved
    /// transactions that fail [Transaction::validate] are skipped.
    pub fn open(storage: Box<dyn KeyValueStorage>) -> Self {
        let transactions = load(storage.as_ref());
        tracing::info!("Loaded {} transactions", transactions.len());

        Self {
            storage,
            transactions,
        }
    }

    /// All transactions in the order they were added.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Append `transaction` and save.
    ///
    /// # Errors
    /// Returns an error if the list could not be saved, in which case the
    /// transaction is not kept.
    pub fn add(&mut self, transaction: Transaction) -> Result<(), Error> {
        let id = transaction.id.clone();
        self.transactions.push(transaction);

        if let Err(error) = self.save() {
            self.transactions.pop();
            return Err(error);
        }

        tracing::info!("Added transaction {id}");
        Ok(())
    }

    /// Remove the transaction with `id` and save.
    ///
    /// Returns `false` without touching storage if no transaction has `id`.
    ///
    /// # Errors
    /// Returns an error if the list could not be saved, in which case the
    /// transaction is put back.
    pub fn remove(&mut self, id: &TransactionId) -> Result<bool, Error> {
        let Some(index) = self
            .transactions
            .iter()
            .position(|transaction| &transaction.id == id)
        else {
            return Ok(false);
        };

        let removed = self.transactions.remove(index);

        if let Err(error) = self.save() {
            self.transactions.insert(index, removed);
            return Err(error);
        }

        tracing::info!("Removed transaction {id}");
        Ok(true)
    }

    /// Overwrite the stored record with the current list.
    ///
    /// # Errors
    /// Returns an error if the list could not be serialized or written.
    pub fn save(&mut self) -> Result<(), Error> {
        let json = self.to_json()?;

        self.storage.set(TRANSACTIONS_KEY, &json)
    }

    /// The current list serialized as it is stored.
    ///
    /// # Errors
    /// Returns [Error::JSONSerializationError] if serialization fails.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string(&self.transactions)
            .map_err(|error| Error::JSONSerializationError(error.to_string()))
    }

    /// Give back the storage, e.g. to reopen it.
    pub fn into_storage(self) -> Box<dyn KeyValueStorage> {
        self.storage
    }
}

fn load(storage: &dyn KeyValueStorage) -> Vec<Transaction> {
    let saved = match storage.get(TRANSACTIONS_KEY) {
        Ok(Some(saved)) => saved,
        Ok(None) => return Vec::new(),
        Err(error) => {
            tracing::warn!("Could not read saved transactions, starting empty: {error}");
            return Vec::new();
        }
    };

    let transactions: Vec<Transaction> = serde_json::from_str(&saved).unwrap_or_else(|error| {
        tracing::warn!("Could not parse saved transactions, starting empty: {error}");
        Vec::new()
    });

    transactions
        .into_iter()
        .filter(|transaction| match transaction.validate() {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!("Skipping saved transaction {}: {error}", transaction.id);
                false
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        storage::{KeyValueStorage, MemoryStorage},
        transaction::{
            Category, Transaction, TransactionId, TransactionType,
            store::{TRANSACTIONS_KEY, TransactionStore},
        },
    };

    fn expense(amount: f64) -> Transaction {
        Transaction::build(
            TransactionType::Expense,
            amount,
            date!(2025 - 10 - 05),
            Category::FoodAndDrinks,
        )
        .finalize()
        .unwrap()
    }

    fn get_test_store() -> TransactionStore {
        TransactionStore::open(Box::new(MemoryStorage::new()))
    }

    /// Storage whose writes always fail.
    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, Error> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), Error> {
            Err(Error::SqlError(rusqlite::Error::InvalidQuery))
        }
    }

    #[test]
    fn empty_storage_loads_empty_list() {
        let store = get_test_store();

        assert!(store.transactions().is_empty());
    }

    #[test]
    fn unparsable_record_loads_empty_list() {
        let mut storage = MemoryStorage::new();
        storage.set(TRANSACTIONS_KEY, "{not json").unwrap();

        let store = TransactionStore::open(Box::new(storage));

        assert!(store.transactions().is_empty());
    }

    #[test]
    fn invalid_saved_transactions_are_skipped() {
        let valid = expense(12.5);
        let record = serde_json::json!([
            valid,
            {
                "id": "negative-salary",
                "date": "2025-10-05",
                "description": "",
                "category": "Salary",
                "type": "expense",
                "amount": -50.0
            },
            {
                "id": "huge",
                "date": "2025-10-05",
                "description": "",
                "category": "Travel",
                "type": "expense",
                "amount": 1e308
            }
        ]);
        let mut storage = MemoryStorage::new();
        storage.set(TRANSACTIONS_KEY, &record.to_string()).unwrap();

        let store = TransactionStore::open(Box::new(storage));

        assert_eq!(store.transactions(), &[valid]);
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut store = get_test_store();
        let first = expense(1.0);
        let second = expense(2.0);

        store.add(first.clone()).unwrap();
        store.add(second.clone()).unwrap();

        assert_eq!(store.transactions(), &[first, second]);
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = get_test_store();
        let want = vec![expense(1.5), expense(20.0), expense(3.25)];
        for transaction in &want {
            store.add(transaction.clone()).unwrap();
        }

        let reopened = TransactionStore::open(store.into_storage());

        assert_eq!(reopened.transactions(), want.as_slice());
    }

    #[test]
    fn cent_amounts_survive_save_and_reopen_exactly() {
        let mut store = get_test_store();
        let want: Vec<Transaction> = [0.01, 0.07, 0.1, 0.3, 123_456.78, 999_999_999.99]
            .into_iter()
            .map(expense)
            .collect();
        for transaction in &want {
            store.add(transaction.clone()).unwrap();
        }

        let reopened = TransactionStore::open(store.into_storage());

        assert_eq!(reopened.transactions(), want.as_slice());
        for (got, want) in reopened.transactions().iter().zip(&want) {
            assert_eq!(got.amount.to_bits(), want.amount.to_bits());
        }
    }

    #[test]
    fn remove_deletes_exactly_one_and_persists() {
        let mut store = get_test_store();
        let keep = expense(1.0);
        let delete = expense(2.0);
        store.add(keep.clone()).unwrap();
        store.add(delete.clone()).unwrap();

        let removed = store.remove(&delete.id).unwrap();

        assert!(removed);
        assert_eq!(store.transactions(), &[keep.clone()]);
        let reopened = TransactionStore::open(store.into_storage());
        assert_eq!(reopened.transactions(), &[keep]);
    }

    #[test]
    fn remove_unknown_id_is_no_op() {
        let mut store = get_test_store();
        let transaction = expense(1.0);
        store.add(transaction.clone()).unwrap();

        let removed = store.remove(&TransactionId::from("missing")).unwrap();

        assert!(!removed);
        assert_eq!(store.transactions(), &[transaction]);
    }

    #[test]
    fn failed_save_rolls_back_add() {
        let mut store = TransactionStore::open(Box::new(ReadOnlyStorage));

        let result = store.add(expense(1.0));

        assert!(result.is_err());
        assert!(store.transactions().is_empty());
    }
}
