//! Defines the endpoint for recording a new expense.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;
use serde::Deserialize;

use crate::{AppState, Error, db::open_connection, endpoints, expense::core::create_expense};

/// The form data for recording an expense.
#[derive(Debug, Deserialize)]
pub struct ExpenseForm {
    /// The date when the expense occurred.
    pub date: String,
    /// The category the expense is filed under.
    pub category: String,
    /// The amount of money spent in dollars.
    ///
    /// `None` when the amount field was left empty.
    #[serde(default)]
    pub amount: Option<f64>,
}

/// A route handler for recording a new expense, redirects to the expenses
/// page on success.
///
/// Incomplete submissions are rejected here, at the form boundary: the
/// database itself persists whatever it is given without validation.
pub async fn create_expense_endpoint(
    State(state): State<AppState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    if form.date.trim().is_empty() {
        return Error::EmptyDate.into_alert_response();
    }

    if form.category.trim().is_empty() {
        return Error::EmptyCategory.into_alert_response();
    }

    let amount = match form.amount {
        Some(amount) if amount.is_finite() => amount,
        _ => return Error::InvalidAmount.into_alert_response(),
    };

    let connection = match open_connection(&state.db_path) {
        Ok(connection) => connection,
        Err(error) => return error.into_alert_response(),
    };

    match create_expense(&form.date, &form.category, amount, &connection) {
        Ok(expense) => {
            tracing::info!(
                "recorded expense {}: {} {} {}",
                expense.id,
                expense.date,
                expense.category,
                expense.amount
            );

            (
                HxRedirect(endpoints::ROOT.to_owned()),
                StatusCode::SEE_OTHER,
            )
                .into_response()
        }
        Err(error) => {
            tracing::error!("could not record expense: {error}");

            error.into_alert_response()
        }
    }
}
