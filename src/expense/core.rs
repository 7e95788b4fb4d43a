//! Defines the core data model and database queries for expenses.

use rusqlite::{Connection, Row};

use crate::Error;

// ============================================================================
// MODELS
// ============================================================================

/// The ID of an expense in the database.
pub type ExpenseId = i64;

/// A single recorded expense: an amount of money spent on a date, filed under
/// a category.
///
/// Expenses are immutable once recorded: there is no update or delete
/// operation, only [create_expense] and [get_all_expenses].
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// The ID of the expense, assigned by the database on creation.
    pub id: ExpenseId,
    /// When the expense happened.
    ///
    /// Stored as opaque text: the database does not parse or validate it.
    pub date: String,
    /// The category the expense is filed under, e.g. "Food" or "Transport".
    ///
    /// The category dropdown offers a fixed set of names, but the database
    /// accepts any string so novel categories survive round trips unchanged.
    pub category: String,
    /// The amount of money spent in dollars.
    pub amount: f64,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Record a new expense in the database.
///
/// The database assigns the ID and commits the insert before returning.
/// No validation is performed here: empty strings and unusual categories are
/// persisted as-is, and rejecting incomplete input is the caller's job.
///
/// # Errors
/// Returns an [Error::SqlError] if the insert fails.
pub fn create_expense(
    date: &str,
    category: &str,
    amount: f64,
    connection: &Connection,
) -> Result<Expense, Error> {
    let expense = connection
        .prepare(
            "INSERT INTO expense (date, category, amount)
             VALUES (?1, ?2, ?3)
             RETURNING id, date, category, amount",
        )?
        .query_row((date, category, amount), map_expense_row)?;

    Ok(expense)
}

/// Retrieve every recorded expense, ordered by ascending ID.
///
/// # Errors
/// Returns an [Error::SqlError] if the query fails.
pub fn get_all_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    let mut statement =
        connection.prepare("SELECT id, date, category, amount FROM expense ORDER BY id ASC")?;

    let expenses = statement
        .query_map([], map_expense_row)?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(expenses)
}

/// Create the expense table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                date TEXT,
                category TEXT,
                amount REAL
                )",
        (),
    )?;

    // Ensure the sequence starts at 1
    connection.execute(
        "INSERT OR IGNORE INTO sqlite_sequence (name, seq) VALUES ('expense', 0)",
        (),
    )?;

    Ok(())
}

/// Map a database row to an Expense.
fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let date = row.get(1)?;
    let category = row.get(2)?;
    let amount = row.get(3)?;

    Ok(Expense {
        id,
        date,
        category,
        amount,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod database_tests {
    use rusqlite::Connection;

    use crate::{
        db::initialize,
        expense::{Expense, create_expense, get_all_expenses},
    };

    fn get_test_connection() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        conn
    }

    #[test]
    fn create_then_read_all_round_trips() {
        let conn = get_test_connection();

        let first = create_expense("2024-01-05", "Food", 12.50, &conn).unwrap();
        let second = create_expense("2024-01-06", "Transport", 4.00, &conn).unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let expenses = get_all_expenses(&conn).unwrap();
        assert_eq!(
            expenses,
            vec![
                Expense {
                    id: 1,
                    date: "2024-01-05".to_owned(),
                    category: "Food".to_owned(),
                    amount: 12.50,
                },
                Expense {
                    id: 2,
                    date: "2024-01-06".to_owned(),
                    category: "Transport".to_owned(),
                    amount: 4.00,
                },
            ]
        );
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let conn = get_test_connection();
        let mut ids = Vec::new();

        for i in 1..=20 {
            let expense = create_expense("2024-02-01", "Other", i as f64, &conn).unwrap();
            ids.push(expense.id);
        }

        for pair in ids.windows(2) {
            assert!(
                pair[0] < pair[1],
                "want strictly increasing ids, got {} then {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn read_all_on_fresh_store_returns_empty() {
        let conn = get_test_connection();

        let expenses = get_all_expenses(&conn).unwrap();

        assert!(expenses.is_empty(), "want no expenses, got {expenses:?}");
    }

    #[test]
    fn creating_expenses_does_not_alter_existing_records() {
        let conn = get_test_connection();
        create_expense("2024-01-05", "Food", 12.50, &conn).unwrap();
        create_expense("2024-01-06", "Transport", 4.00, &conn).unwrap();
        let before = get_all_expenses(&conn).unwrap();

        create_expense("2024-01-07", "Health", 99.99, &conn).unwrap();

        let after = get_all_expenses(&conn).unwrap();
        assert_eq!(after[..2], before[..]);
    }

    #[test]
    fn store_accepts_novel_categories_and_empty_strings() {
        let conn = get_test_connection();

        // The store performs no validation, so whatever the caller hands it
        // must survive the round trip unchanged.
        create_expense("", "Subscriptions", 9.99, &conn).unwrap();

        let expenses = get_all_expenses(&conn).unwrap();
        assert_eq!(expenses.len(), 1);
        assert_eq!(expenses[0].date, "");
        assert_eq!(expenses[0].category, "Subscriptions");
        assert_eq!(expenses[0].amount, 9.99);
    }
}
