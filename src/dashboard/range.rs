//! The time ranges the dashboard totals can be filtered to.

use serde::{Deserialize, Serialize};
use time::Date;

use crate::transaction::Transaction;

/// How far back the dashboard totals reach, relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    /// Only today.
    #[default]
    Daily,
    /// The current calendar month.
    Monthly,
    /// The current calendar year.
    Yearly,
    /// Every transaction.
    All,
}

/// The ranges in the order the range buttons are shown.
pub const TIME_RANGES: [TimeRange; 4] = [
    TimeRange::Daily,
    TimeRange::Monthly,
    TimeRange::Yearly,
    TimeRange::All,
];

impl TimeRange {
    /// The value used in the `range` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::All => "all",
        }
    }

    /// The text on the range button.
    pub fn label(self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
            Self::All => "All Time",
        }
    }

    /// Whether `date` falls within this range as seen from `today`.
    pub fn contains(self, date: Date, today: Date) -> bool {
        match self {
            Self::Daily => date == today,
            Self::Monthly => date.year() == today.year() && date.month() == today.month(),
            Self::Yearly => date.year() == today.year(),
            Self::All => true,
        }
    }
}

/// The transactions dated within `range` of `today`, in their original order.
pub fn filter_by_range(
    transactions: &[Transaction],
    range: TimeRange,
    today: Date,
) -> Vec<&Transaction> {
    transactions
        .iter()
        .filter(|transaction| range.contains(transaction.date, today))
        .collect()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        test_utils::{expense, income},
        transaction::Category,
    };

    use super::{TIME_RANGES, TimeRange, filter_by_range};

    #[test]
    fn defaults_to_daily() {
        assert_eq!(TimeRange::default(), TimeRange::Daily);
    }

    #[test]
    fn parses_query_values() {
        for range in TIME_RANGES {
            let query = format!("range={}", range.as_str());

            let parsed: std::collections::HashMap<String, TimeRange> =
                serde_html_form::from_str(&query).unwrap();

            assert_eq!(parsed["range"], range);
        }
    }

    #[test]
    fn daily_keeps_only_today() {
        let today = date!(2025 - 03 - 15);

        assert!(TimeRange::Daily.contains(today, today));
        assert!(!TimeRange::Daily.contains(date!(2025 - 03 - 14), today));
        assert!(!TimeRange::Daily.contains(date!(2024 - 03 - 15), today));
    }

    #[test]
    fn monthly_respects_month_boundaries() {
        let today = date!(2025 - 03 - 01);

        assert!(TimeRange::Monthly.contains(date!(2025 - 03 - 31), today));
        assert!(!TimeRange::Monthly.contains(date!(2025 - 02 - 28), today));
        assert!(!TimeRange::Monthly.contains(date!(2024 - 03 - 01), today));
    }

    #[test]
    fn yearly_respects_year_boundaries() {
        let today = date!(2025 - 01 - 01);

        assert!(TimeRange::Yearly.contains(date!(2025 - 12 - 31), today));
        assert!(!TimeRange::Yearly.contains(date!(2024 - 12 - 31), today));
    }

    #[test]
    fn all_keeps_everything() {
        let today = date!(2025 - 01 - 01);

        assert!(TimeRange::All.contains(date!(1999 - 06 - 30), today));
        assert!(TimeRange::All.contains(date!(2030 - 06 - 30), today));
    }

    #[test]
    fn filter_matches_predicate_for_every_range() {
        let today = date!(2025 - 12 - 31);
        let transactions = vec![
            expense(1.0, date!(2025 - 12 - 31), Category::Health),
            expense(2.0, date!(2025 - 12 - 01), Category::Travel),
            income(3.0, date!(2025 - 11 - 30), Category::Salary),
            income(4.0, date!(2025 - 01 - 01), Category::Other),
            expense(5.0, date!(2024 - 12 - 31), Category::Shopping),
        ];

        for range in TIME_RANGES {
            let filtered = filter_by_range(&transactions, range, today);

            for transaction in &transactions {
                let is_kept = filtered.iter().any(|kept| kept.id == transaction.id);
                assert_eq!(
                    is_kept,
                    range.contains(transaction.date, today),
                    "{range:?} got wrong result for {}",
                    transaction.date
                );
            }
        }

        assert_eq!(filter_by_range(&transactions, TimeRange::Daily, today).len(), 1);
        assert_eq!(filter_by_range(&transactions, TimeRange::Monthly, today).len(), 2);
        assert_eq!(filter_by_range(&transactions, TimeRange::Yearly, today).len(), 4);
        assert_eq!(filter_by_range(&transactions, TimeRange::All, today).len(), 5);
    }
}
