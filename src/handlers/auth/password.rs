use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::extract::JsonOrForm;
use crate::state::AppState;

use super::{hash_blocking, required};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
    pub answer: Option<String>,
    pub new_password: Option<String>,
}

/// POST /api/v1/auth/forgot-password - Reset a password with the security answer
pub async fn forgot_password(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<ForgotPasswordRequest>,
) -> Result<Json<Value>, ApiError> {
    let mut missing = Vec::new();
    let fields = (
        required(payload.email, "email", &mut missing),
        required(payload.answer, "answer", &mut missing),
        required(payload.new_password, "newPassword", &mut missing),
    );
    let (Some(email), Some(answer), Some(new_password)) = fields else {
        return Err(ApiError::missing_fields(&missing));
    };

    let user = match state.store.find_user_by_email(&email).await? {
        Some(user) if user.answer == answer => user,
        _ => {
            tracing::warn!("Password reset rejected for {}", email);
            return Err(ApiError::not_found("Wrong email or answer"));
        }
    };

    let password_hash = hash_blocking(new_password, state.config.security.bcrypt_cost).await?;
    state.store.update_password(user.id, password_hash).await?;

    tracing::info!("Password reset for {}", user.email);

    Ok(Json(json!({
        "success": true,
        "message": "Password reset successfully"
    })))
}
