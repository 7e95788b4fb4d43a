//! Per-category aggregation of expense amounts for the summary chart.
//!
//! The totals are recomputed from a fresh read of the full record set on
//! every request. At single-user scale a single grouped pass is all this
//! needs, so there is no caching or incremental update.

use std::collections::BTreeMap;

use crate::expense::Expense;

/// Sum expense amounts per category.
///
/// Categories are opaque string keys: novel categories are included, and
/// categories with no matching expenses are absent from the result. An empty
/// input yields an empty map. A `BTreeMap` keeps chart labels in a
/// deterministic (alphabetical) order.
pub fn summarize(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();

    for expense in expenses {
        *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
    }

    totals
}
