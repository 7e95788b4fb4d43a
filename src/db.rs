//! Connection handling and schema creation for the application's database.
//!
//! Every operation opens its own short-lived connection via [open_connection],
//! uses it, and drops it when done. There is no connection pool and no
//! transaction spanning multiple operations: each insert or read is atomic
//! with respect to itself, which is all a single-user app needs.

use std::path::Path;

use rusqlite::Connection;

use crate::{Error, expense::create_expense_table};

/// Create the tables used by the application.
///
/// Idempotent: the schema uses "create if not exists" semantics, so this is
/// safe to call on every connection open.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    create_expense_table(connection)?;

    Ok(())
}

/// Open a connection to the database at `db_path` for a single operation.
///
/// Ensures the schema exists before handing the connection to the caller.
///
/// # Errors
/// Returns [Error::StorageUnavailable] if the database file cannot be opened.
pub fn open_connection(db_path: &Path) -> Result<Connection, Error> {
    let connection = Connection::open(db_path).map_err(|error| {
        tracing::error!(
            "could not open the database at {}: {error}",
            db_path.display()
        );
        Error::StorageUnavailable(error.to_string())
    })?;

    initialize(&connection)?;

    Ok(connection)
}
