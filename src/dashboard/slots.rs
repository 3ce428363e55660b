//! The element IDs that the dashboard views render into.

/// Named output regions of the dashboard page.
///
/// Views take the slots as an argument instead of hard-coding IDs, so the
/// page layout and the rendering stay decoupled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardSlots {
    /// The container of the summary cards.
    pub summary_cards: &'static str,
    /// The total income value.
    pub income_value: &'static str,
    /// The total expenses value.
    pub expenses_value: &'static str,
    /// The balance value.
    pub balance_value: &'static str,
    /// The estimated savings value.
    pub savings_value: &'static str,
    /// The net savings value.
    pub net_savings_value: &'static str,
    /// The per-category progress bars.
    pub category_overview: &'static str,
    /// The daily goals.
    pub goals_list: &'static str,
    /// The doughnut chart container.
    pub expense_chart: &'static str,
    /// The trend chart container.
    pub trend_chart: &'static str,
    /// The body of the transactions table.
    pub transactions_body: &'static str,
    /// The list on the transactions page.
    pub transactions_list: &'static str,
    /// Today's date in the header.
    pub current_date: &'static str,
}

impl Default for DashboardSlots {
    fn default() -> Self {
        Self {
            summary_cards: "summary-cards",
            income_value: "income-value",
            expenses_value: "expenses-value",
            balance_value: "balance-value",
            savings_value: "savings-value",
            net_savings_value: "net-savings-value",
            category_overview: "category-overview",
            goals_list: "goals-list",
            expense_chart: "expense-chart",
            trend_chart: "trend-chart",
            transactions_body: "transactions-body",
            transactions_list: "transactions-list",
            current_date: "current-date",
        }
    }
}
