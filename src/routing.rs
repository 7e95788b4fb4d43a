//! Application router configuration.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    expense::{create_expense_endpoint, get_expenses_page},
    export::export_expenses_csv,
    internal_server_error::get_internal_server_error_page,
    logging::logging_middleware,
    not_found::get_404_not_found,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_expenses_page))
        .route(endpoints::EXPENSES_API, post(create_expense_endpoint))
        .route(endpoints::EXPORT_CSV, get(export_expenses_csv))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

#[cfg(test)]
mod routing_tests {
    use crate::{AppState, routing::build_router, test_utils::temp_db_path};

    #[test]
    fn router_builds_with_all_routes() {
        let state = AppState::new(temp_db_path("router_builds_with_all_routes")).unwrap();

        let _router = build_router(state);
    }
}
