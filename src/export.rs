//! The CSV export of the expense ledger.
//!
//! Serves the full record set as a `text/csv` attachment with the header row
//! `ID,Date,Category,Amount`, one row per expense and no other
//! transformation. An empty store yields just the header row.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    db::open_connection,
    expense::{Expense, get_all_expenses},
};

/// A route handler serving every recorded expense as a CSV download.
pub async fn export_expenses_csv(State(state): State<AppState>) -> Result<Response, Error> {
    let connection = open_connection(&state.db_path)?;
    let expenses = get_all_expenses(&connection)
        .inspect_err(|error| tracing::error!("could not get expenses for export: {error}"))?;
    drop(connection);

    let body = write_csv(&expenses)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"expenses.csv\"",
            ),
        ],
        body,
    )
        .into_response())
}

fn write_csv(expenses: &[Expense]) -> Result<String, Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    // The header is written explicitly so an empty ledger still exports it.
    writer
        .write_record(["ID", "Date", "Category", "Amount"])
        .map_err(|error| Error::CsvError(error.to_string()))?;

    for expense in expenses {
        writer
            .write_record([
                expense.id.to_string(),
                expense.date.clone(),
                expense.category.clone(),
                expense.amount.to_string(),
            ])
            .map_err(|error| Error::CsvError(error.to_string()))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|error| Error::CsvError(error.to_string()))?;

    String::from_utf8(bytes).map_err(|error| Error::CsvError(error.to_string()))
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::header};

    use crate::{
        AppState,
        db::open_connection,
        expense::create_expense,
        export::export_expenses_csv,
        test_utils::temp_db_path,
    };

    #[tokio::test]
    async fn export_on_empty_store_is_header_only() {
        let db_path = temp_db_path("export_on_empty_store_is_header_only");
        let state = AppState::new(&db_path).unwrap();

        let response = export_expenses_csv(State(state)).await.unwrap();
        let body = read_body(response).await;

        assert_eq!(body, "ID,Date,Category,Amount\n");
    }

    #[tokio::test]
    async fn export_contains_one_row_per_expense() {
        let db_path = temp_db_path("export_contains_one_row_per_expense");
        let state = AppState::new(&db_path).unwrap();
        {
            let connection = open_connection(&state.db_path).unwrap();
            create_expense("2024-01-05", "Food", 12.50, &connection).unwrap();
            create_expense("2024-01-06", "Transport", 4.00, &connection).unwrap();
        }

        let response = export_expenses_csv(State(state)).await.unwrap();
        let body = read_body(response).await;

        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID,Date,Category,Amount");
        assert_eq!(lines[1], "1,2024-01-05,Food,12.5");
        assert_eq!(lines[2], "2,2024-01-06,Transport,4");
    }

    #[tokio::test]
    async fn export_sets_download_headers() {
        let db_path = temp_db_path("export_sets_download_headers");
        let state = AppState::new(&db_path).unwrap();

        let response = export_expenses_csv(State(state)).await.unwrap();

        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_DISPOSITION).unwrap(),
            "attachment; filename=\"expenses.csv\""
        );
    }

    async fn read_body(response: axum::response::Response) -> String {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8_lossy(&body).to_string()
    }
}
