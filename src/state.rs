//! Implements a struct that holds the state of the web server.

use std::{path::PathBuf, sync::Arc};

use crate::{Error, db::open_connection};

/// The state of the web server.
///
/// Holds the path to the SQLite database file rather than an open connection:
/// each request opens, uses and drops its own connection so there is no
/// long-lived shared handle to go stale.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The file path to the application's SQLite database.
    pub db_path: Arc<PathBuf>,
}

impl AppState {
    /// Create a new [AppState] for the SQLite database at `db_path`.
    ///
    /// Opens the database once up front so that the schema is created and a
    /// bad path fails at start-up instead of on the first request.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new(db_path: impl Into<PathBuf>) -> Result<Self, Error> {
        let db_path = db_path.into();
        open_connection(&db_path)?;

        Ok(Self {
            db_path: Arc::new(db_path),
        })
    }
}
