//! Serves the category options for the type picked in the add transaction form.

use axum::extract::Query;
use maud::Markup;
use serde::Deserialize;

use crate::transaction::{TransactionType, form::category_options};

/// The query string for [get_category_options].
#[derive(Debug, Deserialize)]
pub struct CategoriesQuery {
    /// The type of transaction to list categories for.
    pub type_: TransactionType,
}

/// A route handler that returns the `<option>` elements for a category select.
pub async fn get_category_options(Query(query): Query<CategoriesQuery>) -> Markup {
    category_options(query.type_)
}
