//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::Error;

/// The smallest amount a transaction can have, one cent.
pub const MIN_AMOUNT: f64 = 0.01;

/// The largest amount a single transaction can have.
pub const MAX_AMOUNT: f64 = 1_000_000_000.0;

// ============================================================================
// MODELS
// ============================================================================

/// The randomly generated key that identifies a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Generate a new random ID.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The ID as a string slice, e.g. for building URLs.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for TransactionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for TransactionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money that was earned.
    Income,
    /// Money that was spent.
    Expense,
}

impl TransactionType {
    /// The value used in forms and query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// The capitalised name for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// The categories a transaction of this type may use.
    pub fn categories(self) -> &'static [Category] {
        match self {
            Self::Income => &INCOME_CATEGORIES,
            Self::Expense => &EXPENSE_CATEGORIES,
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fixed category for a transaction.
///
/// Income and expense categories are disjoint, see [TransactionType::categories].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Wages and salary.
    Salary,
    /// Contract and gig work.
    Freelance,
    /// Dividends, interest and other returns.
    Investment,
    /// Any other income.
    Other,
    /// Groceries, restaurants and drinks.
    #[serde(rename = "Food & Drinks")]
    FoodAndDrinks,
    /// Commuting and local travel.
    Transport,
    /// Trips and holidays.
    Travel,
    /// Clothes, gadgets and other purchases.
    Shopping,
    /// Medical and fitness costs.
    Health,
    /// Films, games, concerts and the like.
    Entertainment,
}

/// The categories available for income, in display order.
pub const INCOME_CATEGORIES: [Category; 4] = [
    Category::Salary,
    Category::Freelance,
    Category::Investment,
    Category::Other,
];

/// The categories available for expenses, in display order.
pub const EXPENSE_CATEGORIES: [Category; 6] = [
    Category::FoodAndDrinks,
    Category::Transport,
    Category::Travel,
    Category::Shopping,
    Category::Health,
    Category::Entertainment,
];

impl Category {
    /// The display name, which is also the stored and submitted value.
    pub fn name(self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Freelance => "Freelance",
            Self::Investment => "Investment",
            Self::Other => "Other",
            Self::FoodAndDrinks => "Food & Drinks",
            Self::Transport => "Transport",
            Self::Travel => "Travel",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
        }
    }

    /// The type of transaction this category belongs to.
    pub fn transaction_type(self) -> TransactionType {
        match self {
            Self::Salary | Self::Freelance | Self::Investment | Self::Other => {
                TransactionType::Income
            }
            Self::FoodAndDrinks
            | Self::Transport
            | Self::Travel
            | Self::Shopping
            | Self::Health
            | Self::Entertainment => TransactionType::Expense,
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        INCOME_CATEGORIES
            .iter()
            .chain(EXPENSE_CATEGORIES.iter())
            .find(|category| category.name() == s.trim())
            .copied()
            .ok_or_else(|| Error::UnknownCategory(s.to_owned()))
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// A text description of what the transaction was for.
    pub description: String,
    /// What the money was spent on or earned from.
    pub category: Category,
    /// Whether the money was earned or spent.
    #[serde(rename = "type")]
    pub type_: TransactionType,
    /// The amount of money spent or earned, always non-negative.
    pub amount: f64,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        type_: TransactionType,
        amount: f64,
        date: Date,
        category: Category,
    ) -> TransactionBuilder {
        TransactionBuilder {
            type_,
            amount,
            date,
            description: String::new(),
            category,
        }
    }

    /// Check that a transaction read back from storage could have been
    /// created through [TransactionBuilder::finalize].
    ///
    /// # Errors
    /// Returns the same errors as [TransactionBuilder::finalize].
    pub fn validate(&self) -> Result<(), Error> {
        check_fields(self.amount, self.category, self.type_)
    }

    /// Whether this transaction is money earned.
    pub fn is_income(&self) -> bool {
        self.type_ == TransactionType::Income
    }

    /// Whether this transaction is money spent.
    pub fn is_expense(&self) -> bool {
        self.type_ == TransactionType::Expense
    }
}

/// A builder for creating [Transaction] instances.
///
/// Call `finalize()` to validate the fields and create the [Transaction] with
/// a fresh random ID.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// use crate::transaction::{Category, Transaction, TransactionType};
///
/// let transaction = Transaction::build(
///         TransactionType::Expense,
///         45.99,
///         date!(2025-01-15),
///         Category::FoodAndDrinks,
///     )
///     .description("Coffee and cake")
///     .finalize()
///     .unwrap();
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// Whether the money was earned or spent.
    pub type_: TransactionType,

    /// The magnitude of the transaction in dollars.
    ///
    /// Must be between [MIN_AMOUNT] and [MAX_AMOUNT] with at most two decimal
    /// places, the direction of the money is given by `type_`.
    pub amount: f64,

    /// The date when the transaction occurred.
    pub date: Date,

    /// A human-readable description of the transaction, may be empty.
    pub description: String,

    /// The category, which must belong to `type_`.
    pub category: Category,
}

impl TransactionBuilder {
    /// Set the description for the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = description.trim().to_owned();
        self
    }

    /// Validate the fields and create the transaction.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::InvalidAmount] if the amount is not a whole number of cents
    ///   between [MIN_AMOUNT] and [MAX_AMOUNT],
    /// - or [Error::CategoryMismatch] if the category belongs to the other transaction type.
    pub fn finalize(self) -> Result<Transaction, Error> {
        check_fields(self.amount, self.category, self.type_)?;

        Ok(Transaction {
            id: TransactionId::new_random(),
            date: self.date,
            description: self.description,
            category: self.category,
            type_: self.type_,
            amount: self.amount,
        })
    }
}

fn check_fields(amount: f64, category: Category, type_: TransactionType) -> Result<(), Error> {
    if !is_valid_amount(amount) {
        return Err(Error::InvalidAmount(amount.to_string()));
    }

    if category.transaction_type() != type_ {
        return Err(Error::CategoryMismatch {
            category,
            transaction_type: type_,
        });
    }

    Ok(())
}

/// Whether `amount` is a whole number of cents within the accepted range.
fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite()
        && (MIN_AMOUNT..=MAX_AMOUNT).contains(&amount)
        && (amount * 100.0).round() / 100.0 == amount
}

/// Parse the amount text entered by the user.
///
/// # Errors
/// Returns [Error::InvalidAmount] with the original text if it is not a
/// number of dollars and cents between [MIN_AMOUNT] and [MAX_AMOUNT].
pub fn parse_amount(text: &str) -> Result<f64, Error> {
    match text.trim().parse::<f64>() {
        Ok(amount) if is_valid_amount(amount) => Ok(amount),
        _ => Err(Error::InvalidAmount(text.to_owned())),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        Error,
        transaction::core::{
            Category, EXPENSE_CATEGORIES, INCOME_CATEGORIES, MAX_AMOUNT, MIN_AMOUNT, Transaction, TransactionType,
            parse_amount,
        },
    };

    #[test]
    fn finalize_succeeds() {
        let transaction = Transaction::build(
            TransactionType::Expense,
            12.3,
            date!(2025 - 10 - 05),
            Category::Transport,
        )
        .description("  Bus fare ")
        .finalize()
        .unwrap();

        assert_eq!(transaction.amount, 12.3);
        assert_eq!(transaction.description, "Bus fare");
        assert!(transaction.is_expense());
        assert!(!transaction.id.as_str().is_empty());
    }

    #[test]
    fn finalize_generates_distinct_ids() {
        let builder = Transaction::build(
            TransactionType::Income,
            1.0,
            date!(2025 - 10 - 05),
            Category::Salary,
        );

        let first = builder.clone().finalize().unwrap();
        let second = builder.finalize().unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn finalize_fails_on_invalid_amount() {
        for amount in [0.0, -5.0, f64::NAN, f64::INFINITY, 1e308, 0.001, 1.005, 1e9 + 0.01] {
            let result = Transaction::build(
                TransactionType::Expense,
                amount,
                date!(2025 - 10 - 05),
                Category::Health,
            )
            .finalize();

            assert!(
                matches!(result, Err(Error::InvalidAmount(_))),
                "want invalid amount error for {amount}, got {result:?}"
            );
        }
    }

    #[test]
    fn finalize_fails_on_category_of_other_type() {
        let result = Transaction::build(
            TransactionType::Expense,
            10.0,
            date!(2025 - 10 - 05),
            Category::Salary,
        )
        .finalize();

        assert_eq!(
            result,
            Err(Error::CategoryMismatch {
                category: Category::Salary,
                transaction_type: TransactionType::Expense
            })
        );
    }

    #[test]
    fn category_lists_are_disjoint_and_match_types() {
        for category in INCOME_CATEGORIES {
            assert_eq!(category.transaction_type(), TransactionType::Income);
            assert!(!EXPENSE_CATEGORIES.contains(&category));
        }

        for category in EXPENSE_CATEGORIES {
            assert_eq!(category.transaction_type(), TransactionType::Expense);
        }
    }

    #[test]
    fn category_parses_from_display_name() {
        assert_eq!("Food & Drinks".parse(), Ok(Category::FoodAndDrinks));
        assert_eq!(" Salary ".parse(), Ok(Category::Salary));
        assert_eq!(
            "Rent".parse::<Category>(),
            Err(Error::UnknownCategory("Rent".to_owned()))
        );
    }

    #[test]
    fn parse_amount_rejects_non_numeric_text() {
        assert_eq!(parse_amount("12.50"), Ok(12.5));
        assert_eq!(parse_amount(" 3 "), Ok(3.0));

        for text in ["", "abc", "12,50", "-4", "0", "NaN", "inf"] {
            assert_eq!(
                parse_amount(text),
                Err(Error::InvalidAmount(text.to_owned())),
                "want {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn parse_amount_enforces_range_and_cents() {
        assert_eq!(parse_amount("0.01"), Ok(MIN_AMOUNT));
        assert_eq!(parse_amount("1000000000"), Ok(MAX_AMOUNT));
        assert_eq!(parse_amount("999999999.99"), Ok(999_999_999.99));
        assert_eq!(parse_amount("0.07"), Ok(0.07));

        for text in ["1e308", "0.001", "1.005", "1000000000.01", "0.004"] {
            assert_eq!(
                parse_amount(text),
                Err(Error::InvalidAmount(text.to_owned())),
                "want {text:?} to be rejected"
            );
        }
    }

    #[test]
    fn validate_rejects_tampered_transactions() {
        let valid = Transaction::build(
            TransactionType::Income,
            3200.0,
            date!(2025 - 10 - 01),
            Category::Salary,
        )
        .finalize()
        .unwrap();
        assert_eq!(valid.validate(), Ok(()));

        let negative = Transaction {
            amount: -50.0,
            ..valid.clone()
        };
        assert!(matches!(
            negative.validate(),
            Err(Error::InvalidAmount(_))
        ));

        let mismatched = Transaction {
            type_: TransactionType::Expense,
            ..valid
        };
        assert_eq!(
            mismatched.validate(),
            Err(Error::CategoryMismatch {
                category: Category::Salary,
                transaction_type: TransactionType::Expense
            })
        );
    }

    #[test]
    fn serializes_in_stored_shape() {
        let transaction = Transaction {
            id: "abc123".into(),
            date: date!(2025 - 01 - 15),
            description: "Lunch".to_owned(),
            category: Category::FoodAndDrinks,
            type_: TransactionType::Expense,
            amount: 20.0,
        };

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc123",
                "date": "2025-01-15",
                "description": "Lunch",
                "category": "Food & Drinks",
                "type": "expense",
                "amount": 20.0
            })
        );
    }
}
