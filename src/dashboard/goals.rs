//! The fixed daily goals shown on the dashboard.

use time::Date;

use crate::{
    dashboard::aggregation::Totals,
    transaction::{Category, Transaction},
};

const DAILY_SAVINGS_TARGET: f64 = 20.0;
const DAILY_ENTERTAINMENT_LIMIT: f64 = 30.0;
const DAILY_FOOD_TARGET: f64 = 30.0;

/// A daily target and how close today's transactions come to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    /// What the goal is, e.g. "Save $20 Daily".
    pub title: &'static str,
    /// Today's progress towards `target`.
    pub current: f64,
    /// The amount that completes the goal.
    pub target: f64,
}

impl Goal {
    /// `current` as a percentage of `target`.
    pub fn progress_percentage(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }

        self.current / self.target * 100.0
    }
}

/// Evaluate the daily goals against the transactions dated `today`.
pub fn daily_goals(transactions: &[Transaction], today: Date) -> [Goal; 3] {
    let todays_transactions: Vec<&Transaction> = transactions
        .iter()
        .filter(|transaction| transaction.date == today)
        .collect();

    let totals = Totals::from_transactions(todays_transactions.iter().copied());
    let spent_on = |category: Category| -> f64 {
        todays_transactions
            .iter()
            .filter(|transaction| transaction.is_expense() && transaction.category == category)
            .map(|transaction| transaction.amount)
            .sum()
    };

    [
        Goal {
            title: "Save $20 Daily",
            current: totals.balance().max(0.0),
            target: DAILY_SAVINGS_TARGET,
        },
        Goal {
            title: "Spend Only $30 On Entertainment",
            current: spent_on(Category::Entertainment).min(DAILY_ENTERTAINMENT_LIMIT),
            target: DAILY_ENTERTAINMENT_LIMIT,
        },
        Goal {
            title: "Spend On Healthy Foods",
            current: spent_on(Category::FoodAndDrinks).min(DAILY_FOOD_TARGET),
            target: DAILY_FOOD_TARGET,
        },
    ]
}
