//! Outlay is a web app for recording and reviewing personal expenses.
//!
//! This library provides a small HTTP server that directly serves HTML pages:
//! a form for entering dated, categorized expense amounts, a table of the
//! recorded expenses, a CSV export, and a bar chart summarizing spending by
//! category.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod db;
mod endpoints;
mod expense;
mod export;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
mod state;
mod summary;
#[cfg(test)]
mod test_utils;

pub use logging::logging_middleware;
pub use routing::build_router;
pub use state::AppState;

use crate::{
    alert::AlertTemplate,
    html::render,
    internal_server_error::{InternalServerErrorPageTemplate, render_internal_server_error},
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was submitted for the expense date.
    ///
    /// The ledger itself accepts any string, so this is only raised at the
    /// form boundary before the expense reaches the database.
    #[error("the date cannot be empty")]
    EmptyDate,

    /// An empty string was submitted for the expense category.
    #[error("the category cannot be empty")]
    EmptyCategory,

    /// The submitted amount was missing or not a finite number.
    #[error("the amount must be a finite number")]
    InvalidAmount,

    /// The expense database could not be opened.
    ///
    /// This covers missing parent directories, permission failures and file
    /// corruption. The operation is not retried; the error string should be
    /// logged on the server and the client shown a generic failure message.
    #[error("the expense database is unavailable: {0}")]
    StorageUnavailable(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The CSV export could not be written.
    #[error("could not write CSV output: {0}")]
    CsvError(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::SqliteFailure(sql_error, ref desc)
                if sql_error.code == rusqlite::ErrorCode::CannotOpen =>
            {
                Error::StorageUnavailable(desc.clone().unwrap_or_else(|| sql_error.to_string()))
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::StorageUnavailable(details) => {
                tracing::error!("the expense database is unavailable: {details}");
                render_internal_server_error(InternalServerErrorPageTemplate {
                    description: "Database Unavailable",
                    fix: "The expense database could not be opened. \
                        Check the server logs and the database file permissions.",
                })
            }
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(Default::default())
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::EmptyDate => render(
                StatusCode::BAD_REQUEST,
                AlertTemplate::error("Missing date", "Pick a date for the expense.").into_markup(),
            ),
            Error::EmptyCategory => render(
                StatusCode::BAD_REQUEST,
                AlertTemplate::error("Missing category", "Select a category for the expense.")
                    .into_markup(),
            ),
            Error::InvalidAmount => render(
                StatusCode::BAD_REQUEST,
                AlertTemplate::error("Invalid amount", "Enter the amount spent as a number.")
                    .into_markup(),
            ),
            Error::StorageUnavailable(_) => render(
                StatusCode::INTERNAL_SERVER_ERROR,
                AlertTemplate::error(
                    "Database unavailable",
                    "The expense could not be saved, check the server logs for more details.",
                )
                .into_markup(),
            ),
            _ => render(
                StatusCode::INTERNAL_SERVER_ERROR,
                AlertTemplate::error(
                    "Something went wrong",
                    "An unexpected error occurred, check the server logs for more details.",
                )
                .into_markup(),
            ),
        }
    }
}
