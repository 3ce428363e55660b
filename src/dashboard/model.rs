//! Everything the dashboard shows, computed in one place so the views only
//! have to lay it out.

use time::Date;

use crate::{
    dashboard::{
        aggregation::{
            CategoryShare, Totals, TrendBucket, category_overview, expense_breakdown, trend_series,
        },
        goals::{Goal, daily_goals},
        range::{TimeRange, filter_by_range},
    },
    transaction::Transaction,
};

/// The aggregated view of the transactions for one time range.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardModel {
    /// The selected time range.
    pub range: TimeRange,
    /// The date the range and goals are relative to.
    pub today: Date,
    /// Income and expenses within the range.
    pub totals: Totals,
    /// Spending per category within the range, for the doughnut chart.
    pub breakdown: Vec<CategoryShare>,
    /// Every expense category's rounded share, for the progress bars.
    pub overview: Vec<CategoryShare>,
    /// Income and expenses over the trailing window for the range.
    pub trend: Vec<TrendBucket>,
    /// Today's progress on the daily goals.
    pub goals: [Goal; 3],
    /// The transactions within the range, newest first.
    pub transactions: Vec<Transaction>,
}

impl DashboardModel {
    /// Aggregate `transactions` for `range` as seen from `today`.
    ///
    /// The trend is computed from every transaction so its window is not cut
    /// short by the range filter.
    pub fn build(transactions: &[Transaction], range: TimeRange, today: Date) -> Self {
        let in_range = filter_by_range(transactions, range, today);

        let mut sorted: Vec<Transaction> = in_range.iter().map(|&t| t.clone()).collect();
        // Stable, so transactions on the same day keep their insertion order.
        sorted.sort_by(|a, b| b.date.cmp(&a.date));

        Self {
            range,
            today,
            totals: Totals::from_transactions(in_range.iter().copied()),
            breakdown: expense_breakdown(&in_range),
            overview: category_overview(&in_range),
            trend: trend_series(transactions, range, today),
            goals: daily_goals(transactions, today),
            transactions: sorted,
        }
    }
}
