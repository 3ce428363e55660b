//! Transaction aggregation for the dashboard: totals, the expense breakdown by
//! category and the income/expense trend.
//!
//! Everything here is a pure function of the transactions and today's date.

use time::{Date, Duration, Month, Weekday};

use crate::{
    dashboard::range::TimeRange,
    transaction::{Category, EXPENSE_CATEGORIES, Transaction},
};

/// The share of income assumed to be put aside, used for the estimated savings card.
pub const SAVINGS_RATE: f64 = 0.2;

/// Summed income and expenses for a set of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    /// The sum of all income amounts.
    pub income: f64,
    /// The sum of all expense amounts.
    pub expenses: f64,
}

impl Totals {
    /// Sum the income and expenses in `transactions`.
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        transactions
            .into_iter()
            .fold(Self::default(), |mut totals, transaction| {
                if transaction.is_income() {
                    totals.income += transaction.amount;
                } else {
                    totals.expenses += transaction.amount;
                }

                totals
            })
    }

    /// Income minus expenses.
    pub fn balance(&self) -> f64 {
        self.income - self.expenses
    }

    /// A fixed fraction of income, see [SAVINGS_RATE].
    pub fn estimated_savings(&self) -> f64 {
        self.income * SAVINGS_RATE
    }

    /// What is actually left over, i.e. the balance.
    pub fn net_savings(&self) -> f64 {
        self.balance()
    }
}

/// How much was spent in one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// The expense category.
    pub category: Category,
    /// The summed expense amount.
    pub amount: f64,
    /// The amount as a percentage of all expenses, in `0.0..=100.0`.
    pub percentage: f64,
}

/// Group the expenses in `transactions` by category.
///
/// Only categories with spending are included, in the fixed category order.
/// Returns an empty list when nothing was spent.
pub fn expense_breakdown(transactions: &[&Transaction]) -> Vec<CategoryShare> {
    let totals = sum_expenses_by_category(transactions);
    let total_expenses: f64 = totals.iter().map(|(_, amount)| amount).sum();

    if total_expenses <= 0.0 {
        return Vec::new();
    }

    totals
        .into_iter()
        .filter(|(_, amount)| *amount > 0.0)
        .map(|(category, amount)| CategoryShare {
            category,
            amount,
            percentage: amount / total_expenses * 100.0,
        })
        .collect()
}

/// Every expense category with its share of spending rounded to a whole
/// percentage, including categories with no spending.
pub fn category_overview(transactions: &[&Transaction]) -> Vec<CategoryShare> {
    let totals = sum_expenses_by_category(transactions);
    let total_expenses: f64 = totals.iter().map(|(_, amount)| amount).sum();

    totals
        .into_iter()
        .map(|(category, amount)| {
            let percentage = if total_expenses > 0.0 {
                (amount / total_expenses * 100.0).round()
            } else {
                0.0
            };

            CategoryShare {
                category,
                amount,
                percentage,
            }
        })
        .collect()
}

fn sum_expenses_by_category(transactions: &[&Transaction]) -> Vec<(Category, f64)> {
    EXPENSE_CATEGORIES
        .iter()
        .map(|&category| {
            let amount = transactions
                .iter()
                .filter(|transaction| transaction.is_expense() && transaction.category == category)
                .map(|transaction| transaction.amount)
                .sum();

            (category, amount)
        })
        .collect()
}

/// The period that a trend bucket covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendPeriod {
    /// One calendar day, over the last 7 days.
    Day,
    /// One calendar month, over the last 6 months.
    Month,
    /// One calendar year, over the last 5 years.
    Year,
}

impl TrendPeriod {
    /// The number of buckets in the trailing window.
    pub fn window_length(self) -> i32 {
        match self {
            Self::Day => 7,
            Self::Month => 6,
            Self::Year => 5,
        }
    }
}

impl From<TimeRange> for TrendPeriod {
    fn from(range: TimeRange) -> Self {
        match range {
            TimeRange::Daily => Self::Day,
            TimeRange::Monthly => Self::Month,
            TimeRange::Yearly | TimeRange::All => Self::Year,
        }
    }
}

/// Income and expenses summed over one trend period.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendBucket {
    /// The axis label, e.g. "Mon", "Jan" or "2025".
    pub label: String,
    /// Income dated within the period.
    pub income: f64,
    /// Expenses dated within the period.
    pub expense: f64,
}

/// A bucket key that a date either falls into or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BucketKey {
    Day(Date),
    Month(i32, Month),
    Year(i32),
}

impl BucketKey {
    fn contains(self, date: Date) -> bool {
        match self {
            Self::Day(day) => date == day,
            Self::Month(year, month) => date.year() == year && date.month() == month,
            Self::Year(year) => date.year() == year,
        }
    }

    fn label(self) -> String {
        match self {
            Self::Day(day) => weekday_abbreviation(day.weekday()).to_owned(),
            Self::Month(_, month) => month_abbreviation(month).to_owned(),
            Self::Year(year) => year.to_string(),
        }
    }
}

/// The keys of the trailing window ending at `today`, oldest first.
fn window_keys(period: TrendPeriod, today: Date) -> Vec<BucketKey> {
    let length = period.window_length();

    (0..length)
        .rev()
        .map(|offset| match period {
            TrendPeriod::Day => BucketKey::Day(today - Duration::days(offset.into())),
            TrendPeriod::Month => {
                let months_since_year_zero = today.year() * 12 + today.month() as i32 - 1 - offset;
                BucketKey::Month(
                    months_since_year_zero.div_euclid(12),
                    today.month().nth_prev(offset as u8),
                )
            }
            TrendPeriod::Year => BucketKey::Year(today.year() - offset),
        })
        .collect()
}

/// Sum income and expenses per period over the trailing window for `range`,
/// oldest first. Periods without transactions have zero totals.
pub fn trend_series(transactions: &[Transaction], range: TimeRange, today: Date) -> Vec<TrendBucket> {
    window_keys(range.into(), today)
        .into_iter()
        .map(|key| {
            let totals = Totals::from_transactions(
                transactions
                    .iter()
                    .filter(|transaction| key.contains(transaction.date)),
            );

            TrendBucket {
                label: key.label(),
                income: totals.income,
                expense: totals.expenses,
            }
        })
        .collect()
}

fn weekday_abbreviation(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "Mon",
        Weekday::Tuesday => "Tue",
        Weekday::Wednesday => "Wed",
        Weekday::Thursday => "Thu",
        Weekday::Friday => "Fri",
        Weekday::Saturday => "Sat",
        Weekday::Sunday => "Sun",
    }
}

fn month_abbreviation(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}
