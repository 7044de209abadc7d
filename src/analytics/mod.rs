//! Analytics module
//!
//! Derives summary statistics and per-category breakdowns from the
//! transaction ledger and renders them as cards, progress bars and a chart.

mod aggregation;
mod cards;
mod charts;
mod handlers;

pub(crate) use handlers::get_analytics_page;
