use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /Budgets/budget.html - Every budget as a bare JSON array
///
/// Not scoped to the caller: all budgets are returned. Failures answer in
/// plain text, matching what the page script expects.
pub async fn get(State(state): State<AppState>) -> Response {
    match state.store.list_budgets().await {
        Ok(budgets) => (StatusCode::OK, Json(budgets)).into_response(),
        Err(e) => {
            tracing::error!("Listing budgets failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}
