use std::sync::{Arc, Mutex};

use time::Date;

use crate::{
    storage::MemoryStorage,
    transaction::{Category, Transaction, TransactionStore, TransactionType},
};

#[track_caller]
pub(crate) fn expense(amount: f64, date: Date, category: Category) -> Transaction {
    Transaction::build(TransactionType::Expense, amount, date, category)
        .finalize()
        .expect("Could not create test expense")
}

#[track_caller]
pub(crate) fn income(amount: f64, date: Date, category: Category) -> Transaction {
    Transaction::build(TransactionType::Income, amount, date, category)
        .finalize()
        .expect("Could not create test income")
}

/// A store backed by in-memory storage holding `transactions`.
#[track_caller]
pub(crate) fn test_store_with(transactions: &[Transaction]) -> Arc<Mutex<TransactionStore>> {
    let mut store = TransactionStore::open(Box::new(MemoryStorage::new()));

    for transaction in transactions {
        store
            .add(transaction.clone())
            .expect("Could not add test transaction");
    }

    Arc::new(Mutex::new(store))
}
