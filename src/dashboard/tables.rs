//! The table of transactions within the selected time range.

use maud::{Markup, html};

use crate::{
    dashboard::slots::DashboardSlots,
    html::{CARD_STYLE, FADE_IN_CLASS, TABLE_CELL_STYLE, TABLE_HEADER_STYLE},
    transaction::{Transaction, transaction_table_row},
};

/// Renders the transactions newest first, `transactions` must already be sorted.
pub(super) fn transactions_table(transactions: &[Transaction], slots: &DashboardSlots) -> Markup {
    html! {
        section class={(CARD_STYLE) " w-full"} {
            h3 class="text-lg font-semibold mb-4" { "Transactions" }

            div class="overflow-x-auto" {
                table class="w-full text-sm text-left text-gray-500 dark:text-gray-400" {
                    thead class=(TABLE_HEADER_STYLE) {
                        tr {
                            th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                            th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                            th scope="col" class={(TABLE_CELL_STYLE) " text-right"} { "Amount" }
                        }
                    }
                    tbody id=(slots.transactions_body) class=(FADE_IN_CLASS) {
                        @for transaction in transactions {
                            (transaction_table_row(transaction))
                        }

                        @if transactions.is_empty() {
                            tr {
                                td colspan="4" class={(TABLE_CELL_STYLE) " text-center"} {
                                    "No transactions in this period."
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
