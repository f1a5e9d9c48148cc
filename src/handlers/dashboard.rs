use axum::{extract::State, Json};
use serde::Deserialize;

use crate::database::models::DashboardRecord;
use crate::error::{ApiError, INTERNAL_ERROR_MESSAGE};
use crate::extract::JsonOrForm;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardRequest {
    pub email: Option<String>,
}

/// POST /api/dashboard - Regenerate the dashboard for an email
///
/// Draws new demo income/expense series, then inserts the record or
/// overwrites the one already stored for the email. Replies with the
/// persisted record (not enveloped).
pub async fn post(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<DashboardRequest>,
) -> Result<Json<DashboardRecord>, ApiError> {
    // Email is neither required nor validated
    let email = payload.email.unwrap_or_default();

    let record = DashboardRecord::generate(email).map_err(|e| {
        tracing::error!("Error generating dashboard data: {}", e);
        ApiError::internal_server_error(INTERNAL_ERROR_MESSAGE)
    })?;

    let saved = state.store.upsert_dashboard(record).await.map_err(|e| {
        tracing::error!("Error updating or fetching dashboard data: {}", e);
        ApiError::internal_server_error(INTERNAL_ERROR_MESSAGE)
    })?;

    Ok(Json(saved))
}
