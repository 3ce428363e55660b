//! The add transaction modals on the dashboard and the category options they use.

use maud::{Markup, PreEscaped, html};
use time::Date;

use crate::{
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, BUTTON_SECONDARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        HeadElement,
    },
    transaction::{
        TransactionType,
        core::{MAX_AMOUNT, MIN_AMOUNT},
    },
};

/// The three ways of adding a transaction from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionModal {
    /// An expense dated today.
    Expense,
    /// An income dated today.
    Income,
    /// Either type with a chosen date.
    Transaction,
}

/// All modals in the order their buttons are shown.
pub const TRANSACTION_MODALS: [TransactionModal; 3] = [
    TransactionModal::Expense,
    TransactionModal::Income,
    TransactionModal::Transaction,
];

impl TransactionModal {
    /// The prefix for the element IDs inside this modal.
    fn prefix(self) -> &'static str {
        match self {
            Self::Expense => "expense",
            Self::Income => "income",
            Self::Transaction => "transaction",
        }
    }

    /// The element ID of the modal.
    pub fn id(self) -> String {
        format!("{}-modal", self.prefix())
    }

    /// The element ID of the category select.
    pub fn category_select_id(self) -> String {
        format!("{}-category", self.prefix())
    }

    /// The modal heading and button text.
    pub fn title(self) -> &'static str {
        match self {
            Self::Expense => "Add Expense",
            Self::Income => "Add Income",
            Self::Transaction => "Add Transaction",
        }
    }

    /// The type of transaction this modal is fixed to, if any.
    fn fixed_type(self) -> Option<TransactionType> {
        match self {
            Self::Expense => Some(TransactionType::Expense),
            Self::Income => Some(TransactionType::Income),
            Self::Transaction => None,
        }
    }
}

/// The `<option>` elements for the categories of `transaction_type`, after a
/// disabled placeholder.
pub fn category_options(transaction_type: TransactionType) -> Markup {
    html! {
        option value="" disabled selected { "Select Category" }

        @for category in transaction_type.categories() {
            option value=(category.name()) { (category.name()) }
        }
    }
}

/// A button that opens `modal`.
pub fn open_modal_button(modal: TransactionModal, style: &str) -> Markup {
    html! {
        button type="button" data-modal-open=(modal.id()) class=(style) {
            (modal.title())
        }
    }
}

/// The hidden modal with the form for adding a transaction.
///
/// `today` is used as the date of fixed type modals and as the latest date
/// that can be picked.
pub fn transaction_modal(modal: TransactionModal, today: Date) -> Markup {
    let prefix = modal.prefix();
    let amount_id = format!("{prefix}-amount");
    let description_id = format!("{prefix}-description");
    let category_id = modal.category_select_id();

    html! {
        div
            id=(modal.id())
            data-modal
            role="dialog"
            aria-modal="true"
            aria-labelledby={(prefix) "-modal-title"}
            class="hidden fixed inset-0 z-50 flex items-center justify-center bg-gray-900/50 p-4"
        {
            div class="w-full max-w-md rounded-lg bg-white p-6 shadow-xl dark:bg-gray-800" {
                h3 id={(prefix) "-modal-title"} class="mb-4 text-xl font-semibold text-gray-900 dark:text-white" {
                    (modal.title())
                }

                form
                    hx-post=(endpoints::TRANSACTIONS_API)
                    hx-target-error="#alert-container"
                    class="space-y-4"
                {
                    @match modal.fixed_type() {
                        Some(transaction_type) => {
                            input type="hidden" name="type_" value=(transaction_type.as_str());
                        }
                        None => {
                            div {
                                label for="transaction-type" class=(FORM_LABEL_STYLE) { "Type" }

                                select
                                    name="type_"
                                    id="transaction-type"
                                    hx-get=(endpoints::CATEGORIES)
                                    hx-trigger="change"
                                    hx-target={"#" (category_id)}
                                    hx-target-error="#alert-container"
                                    required
                                    class=(FORM_TEXT_INPUT_STYLE)
                                {
                                    @for transaction_type in [TransactionType::Expense, TransactionType::Income] {
                                        option
                                            value=(transaction_type.as_str())
                                            selected[transaction_type == TransactionType::Expense]
                                        {
                                            (transaction_type.label())
                                        }
                                    }
                                }
                            }
                        }
                    }

                    div {
                        label for=(amount_id) class=(FORM_LABEL_STYLE) { "Amount" }

                        div class="input-wrapper w-full" {
                            input
                                name="amount"
                                id=(amount_id)
                                type="number"
                                step="0.01"
                                min=(MIN_AMOUNT)
                                max=(MAX_AMOUNT)
                                placeholder="0.00"
                                required
                                class=(FORM_TEXT_INPUT_STYLE);
                        }
                    }

                    div {
                        label for=(description_id) class=(FORM_LABEL_STYLE) { "Description" }

                        input
                            name="description"
                            id=(description_id)
                            type="text"
                            placeholder="Description"
                            class=(FORM_TEXT_INPUT_STYLE);
                    }

                    @if modal.fixed_type().is_none() {
                        div {
                            label for="transaction-date" class=(FORM_LABEL_STYLE) { "Date" }

                            input
                                name="date"
                                id="transaction-date"
                                type="date"
                                max=(today)
                                value=(today)
                                required
                                class=(FORM_TEXT_INPUT_STYLE);
                        }
                    }

                    div {
                        label for=(category_id) class=(FORM_LABEL_STYLE) { "Category" }

                        select name="category" id=(category_id) required class=(FORM_TEXT_INPUT_STYLE) {
                            (category_options(modal.fixed_type().unwrap_or(TransactionType::Expense)))
                        }
                    }

                    div class="flex gap-4 pt-2" {
                        button type="button" data-modal-close=(modal.id()) class=(BUTTON_SECONDARY_STYLE) {
                            "Cancel"
                        }

                        button type="submit" class=(BUTTON_PRIMARY_STYLE) {
                            (modal.title())
                        }
                    }
                }
            }
        }
    }
}

/// Opens and closes the modals: buttons with `data-modal-open`/`data-modal-close`
/// toggle the modal with that ID and clicking the backdrop closes it.
pub fn modal_script() -> HeadElement {
    HeadElement::ScriptSource(PreEscaped(
        r#"
        document.addEventListener('click', function(event) {
            const openButton = event.target.closest('[data-modal-open]');
            if (openButton) {
                document.getElementById(openButton.dataset.modalOpen).classList.remove('hidden');
                return;
            }

            const closeButton = event.target.closest('[data-modal-close]');
            if (closeButton) {
                document.getElementById(closeButton.dataset.modalClose).classList.add('hidden');
                return;
            }

            if (event.target.hasAttribute('data-modal')) {
                event.target.classList.add('hidden');
            }
        });
        "#
        .to_owned(),
    ))
}
