//! Defines the route handler for the expenses page.
//!
//! One page serves the whole app: the entry form, the table of recorded
//! expenses, the CSV download link and the per-category summary chart. The
//! page is rebuilt from a fresh read of the database on every request.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error,
    db::open_connection,
    endpoints,
    html::{
        HeadElement, LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE,
        TABLE_ROW_STYLE, base, dollar_input_styles, format_currency,
    },
    summary::{SummaryChart, chart_script, chart_view, summarize},
};

use super::{
    core::{Expense, get_all_expenses},
    form::expense_form,
};

/// Display the expense form, records table and summary chart.
pub async fn get_expenses_page(State(state): State<AppState>) -> Result<Response, Error> {
    let connection = open_connection(&state.db_path)?;
    let expenses = get_all_expenses(&connection)
        .inspect_err(|error| tracing::error!("could not get expenses: {error}"))?;
    drop(connection);

    let today = OffsetDateTime::now_utc().date();

    Ok(expenses_view(today, &expenses).into_response())
}

fn expenses_view(default_date: Date, expenses: &[Expense]) -> Markup {
    let totals = summarize(expenses);
    let chart = (!expenses.is_empty()).then(|| SummaryChart::from_category_totals(&totals));

    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-2xl font-bold mb-6" { "Personal Expense Tracker" }

            section id="new-expense" class="w-full max-w-md mb-8"
            {
                h2 class="text-xl font-semibold mb-4" { "New Expense" }

                (expense_form(default_date))
            }

            section id="expense-records" class="w-full max-w-screen-lg mb-8"
            {
                h2 class="text-xl font-semibold mb-4" { "Expense Records" }

                @if expenses.is_empty() {
                    p class="text-center" { "No expenses recorded yet." }
                } @else {
                    (expenses_table(expenses))
                }

                p class="mt-4"
                {
                    a
                        href=(endpoints::EXPORT_CSV)
                        download="expenses.csv"
                        class=(LINK_STYLE)
                    {
                        "Download CSV"
                    }
                }
            }

            section id="expense-summary" class="w-full max-w-screen-lg mb-8"
            {
                h2 class="text-xl font-semibold mb-4" { "Expense Summary" }

                @if let Some(chart) = &chart {
                    (chart_view(chart))
                } @else {
                    p
                    {
                        "The summary chart will show up here once you add some expenses."
                    }
                }
            }
        }
    );

    let mut scripts = vec![dollar_input_styles()];

    if let Some(chart) = &chart {
        scripts.push(HeadElement::ScriptLink(
            "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js".to_owned(),
        ));
        scripts.push(chart_script(chart));
    }

    base("Expenses", &scripts, &content)
}

fn expenses_table(expenses: &[Expense]) -> Markup {
    html!(
        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
        {
            thead class=(TABLE_HEADER_STYLE)
            {
                tr
                {
                    th scope="col" class=(TABLE_CELL_STYLE) { "ID" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                }
            }

            tbody
            {
                @for expense in expenses {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE) { (expense.id) }
                        td class=(TABLE_CELL_STYLE) { (expense.date) }
                        td class=(TABLE_CELL_STYLE) { (expense.category) }
                        td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::State,
        http::{Response, StatusCode},
    };
    use scraper::{Html, Selector};

    use crate::{
        AppState,
        db::open_connection,
        expense::{create_expense, expenses_page::get_expenses_page},
        test_utils::temp_db_path,
    };

    #[tokio::test]
    async fn page_shows_table_and_chart_with_data() {
        let db_path = temp_db_path("page_shows_table_and_chart_with_data");
        let state = AppState::new(&db_path).unwrap();
        {
            let connection = open_connection(&state.db_path).unwrap();
            create_expense("2024-01-05", "Food", 12.50, &connection).unwrap();
            create_expense("2024-01-06", "Transport", 4.00, &connection).unwrap();
        }

        let response = get_expenses_page(State(state)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html(response).await;
        assert_valid_html(&html);

        let row_selector = Selector::parse("tbody tr").unwrap();
        let rows: Vec<_> = html.select(&row_selector).collect();
        assert_eq!(rows.len(), 2, "want 2 table rows");

        let chart_selector = Selector::parse("#expense-summary-chart").unwrap();
        assert!(
            html.select(&chart_selector).next().is_some(),
            "summary chart container not found"
        );
    }

    #[tokio::test]
    async fn page_shows_empty_state_without_data() {
        let db_path = temp_db_path("page_shows_empty_state_without_data");
        let state = AppState::new(&db_path).unwrap();

        let response = get_expenses_page(State(state)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let html = parse_html(response).await;
        assert_valid_html(&html);

        let text = html.root_element().text().collect::<String>();
        assert!(
            text.contains("No expenses recorded yet."),
            "empty state message not found"
        );

        let chart_selector = Selector::parse("#expense-summary-chart").unwrap();
        assert!(
            html.select(&chart_selector).next().is_none(),
            "summary chart should be absent on an empty store"
        );
    }

    #[tokio::test]
    async fn page_always_contains_form_and_download_link() {
        let db_path = temp_db_path("page_always_contains_form_and_download_link");
        let state = AppState::new(&db_path).unwrap();

        let response = get_expenses_page(State(state)).await.unwrap();
        let html = parse_html(response).await;

        let form_selector = Selector::parse("form[hx-post='/api/expenses']").unwrap();
        assert!(
            html.select(&form_selector).next().is_some(),
            "expense form not found"
        );

        let link_selector = Selector::parse("a[href='/expenses.csv']").unwrap();
        assert!(
            html.select(&link_selector).next().is_some(),
            "CSV download link not found"
        );
    }

    async fn parse_html(response: Response<Body>) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }
}
