use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::error::{ApiError, INTERNAL_ERROR_MESSAGE};
use crate::state::AppState;

/// DELETE /api/v1/budgets/:id - Delete a budget by storage id
///
/// Answers `{"success": true}` whether or not the id existed. A malformed id
/// is treated like a persistence failure.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let id = Uuid::parse_str(&id).map_err(|e| {
        tracing::error!("Invalid budget id '{}': {}", id, e);
        ApiError::internal_server_error(INTERNAL_ERROR_MESSAGE)
    })?;

    let removed = state.store.delete_budget(id).await.map_err(|e| {
        tracing::error!("Deleting budget {} failed: {}", id, e);
        ApiError::internal_server_error(INTERNAL_ERROR_MESSAGE)
    })?;

    if !removed {
        tracing::debug!("Budget {} did not exist", id);
    }

    Ok(Json(json!({ "success": true })))
}
