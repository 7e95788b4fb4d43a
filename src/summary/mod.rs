//! The expense summary: per-category totals and the chart built from them.

mod aggregation;
mod chart;

pub use aggregation::summarize;
pub use chart::{SummaryChart, chart_script, chart_view};
