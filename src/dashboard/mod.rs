//! Dashboard module
//!
//! Provides an overview page with the totals, spending breakdown, trend and
//! daily goals for a selected time range.

mod aggregation;
mod cards;
mod charts;
mod goals;
mod handlers;
mod model;
mod range;
mod slots;
mod tables;

pub use handlers::get_dashboard_page;
pub(crate) use slots::DashboardSlots;
