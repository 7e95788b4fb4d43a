//! Expense recording and display.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and the database functions for recording and reading them
//! - The entry form and the page that displays the records table and summary chart
//! - The endpoint for recording a new expense

mod core;
mod create_endpoint;
mod expenses_page;
mod form;

pub use core::{Expense, create_expense_table, get_all_expenses};
pub use create_endpoint::create_expense_endpoint;
pub use expenses_page::get_expenses_page;

#[cfg(test)]
pub use core::create_expense;
