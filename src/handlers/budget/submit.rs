use axum::extract::State;

use crate::database::models::{BudgetRecord, BudgetSubmission};
use crate::error::{ApiError, INTERNAL_ERROR_MESSAGE};
use crate::extract::JsonOrForm;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// POST /budget-submit-form - Create or update the budget for an email
///
/// Requires `name`, `email`, `period`, `description`, `amount` and
/// `expenses`; blank text and zero amounts count as missing. A rejected
/// submission writes nothing. `expenses` is stored as `expense`.
pub async fn post(
    State(state): State<AppState>,
    JsonOrForm(submission): JsonOrForm<BudgetSubmission>,
) -> ApiResult<BudgetRecord> {
    let budget = submission.validate().map_err(|missing| {
        tracing::warn!("Budget submission rejected, missing fields: {:?}", missing);
        ApiError::missing_fields(&missing)
    })?;

    let saved = state.store.upsert_budget(budget).await.map_err(|e| {
        tracing::error!("Form submission failed: {}", e);
        ApiError::internal_server_error(INTERNAL_ERROR_MESSAGE)
    })?;

    tracing::info!("Saved budget {} for {}", saved.id, saved.email);
    Ok(ApiResponse::success(saved))
}
