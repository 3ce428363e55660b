//! Transaction management for the dashboard.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model, its categories and `TransactionBuilder`
//! - The `TransactionStore` that keeps transactions in key-value storage
//! - The add transaction modals and the HTML for single transactions
//! - Route handlers for creating, deleting, exporting and listing transactions

mod categories_endpoint;
mod core;
mod create_endpoint;
mod delete_endpoint;
mod export_endpoint;
mod form;
mod store;
mod transactions_page;
mod view;

pub use categories_endpoint::get_category_options;
pub use core::{
    Category, EXPENSE_CATEGORIES, Transaction, TransactionBuilder, TransactionId, TransactionType,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use export_endpoint::export_transactions_endpoint;
pub use form::{
    TRANSACTION_MODALS, TransactionModal, modal_script, open_modal_button, transaction_modal,
};
pub use store::TransactionStore;
pub use transactions_page::get_transactions_page;

pub(crate) use view::transaction_table_row;
