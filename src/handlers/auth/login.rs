use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::auth::{generate_jwt, Claims};
use crate::error::{ApiError, INTERNAL_ERROR_MESSAGE};
use crate::extract::JsonOrForm;
use crate::state::AppState;

use super::{required, verify_blocking};

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/v1/auth/login - Check credentials and issue a JWT
///
/// Expected Output (Success):
/// ```json
/// {
///   "success": true,
///   "message": "Login successful",
///   "user": { "id": "…", "name": "…", "email": "…", "phone": "…", "address": "…", "role": 0 },
///   "token": "eyJhbGciOiJIUzI1NiI..."
/// }
/// ```
pub async fn post(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut missing = Vec::new();
    let fields = (
        required(payload.email, "email", &mut missing),
        required(payload.password, "password", &mut missing),
    );
    let (Some(email), Some(password)) = fields else {
        return Err(ApiError::missing_fields(&missing));
    };

    let user = state
        .store
        .find_user_by_email(&email)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Login failed: unknown email {}", email);
            ApiError::not_found("Email is not registered")
        })?;

    if !verify_blocking(password, user.password_hash.clone()).await? {
        tracing::warn!("Login failed: wrong password for {}", email);
        return Err(ApiError::unauthorized("Invalid password"));
    }

    let security = &state.config.security;
    let claims = Claims::new(user.id, &user.email, security.jwt_expiry_hours);
    let token = generate_jwt(&claims, &security.jwt_secret).map_err(|e| {
        tracing::error!("Login failed: {}", e);
        ApiError::internal_server_error(INTERNAL_ERROR_MESSAGE)
    })?;

    tracing::info!("User {} logged in", user.email);

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "user": user,
        "token": token
    })))
}
