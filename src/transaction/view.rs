//! HTML for a single transaction, shared by the dashboard table and the
//! transactions page.

use maud::{Markup, html};

use crate::{
    endpoints::{self, format_endpoint},
    html::{BUTTON_DELETE_STYLE, TABLE_CELL_STYLE, TABLE_ROW_STYLE, format_currency},
    transaction::{Transaction, TransactionType},
};

/// The CSS class that colours an amount by transaction type.
pub(crate) fn amount_class(type_: TransactionType) -> &'static str {
    match type_ {
        TransactionType::Income => "amount-income text-green-600 dark:text-green-400",
        TransactionType::Expense => "amount-expense text-red-600 dark:text-red-400",
    }
}

/// The amount with a leading "+" for income and "-" for expenses, e.g. "-$12.30".
pub(crate) fn signed_amount(transaction: &Transaction) -> String {
    let sign = match transaction.type_ {
        TransactionType::Income => "+",
        TransactionType::Expense => "-",
    };

    format!("{sign}{}", format_currency(transaction.amount))
}

/// A table row with the date, description, category and amount.
pub(crate) fn transaction_table_row(transaction: &Transaction) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE) {
            td class=(TABLE_CELL_STYLE) { (transaction.date) }
            td class=(TABLE_CELL_STYLE) { (transaction.description) }
            td class=(TABLE_CELL_STYLE) { (transaction.category) }
            td class={(TABLE_CELL_STYLE) " text-right " (amount_class(transaction.type_))} {
                (format_currency(transaction.amount))
            }
        }
    }
}

/// A list item with the transaction details and a delete button.
pub(crate) fn transaction_list_item(transaction: &Transaction) -> Markup {
    let delete_url = format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id.as_str());
    let name = if transaction.description.is_empty() {
        transaction.category.name()
    } else {
        transaction.description.as_str()
    };

    html! {
        li
            class="flex items-center justify-between gap-4 py-3"
            data-transaction-id=(transaction.id)
        {
            div class="min-w-0" {
                p class="truncate font-medium text-gray-900 dark:text-white" { (name) }
                p class="text-sm text-gray-500 dark:text-gray-400" {
                    time datetime=(transaction.date) { (transaction.date) }
                    " · " (transaction.category)
                }
            }

            div class="flex shrink-0 items-center gap-4" {
                span class={"tabular-nums " (amount_class(transaction.type_))} {
                    (signed_amount(transaction))
                }

                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-confirm={
                        "Are you sure you want to delete '" (name) "'? This cannot be undone."
                    }
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}
