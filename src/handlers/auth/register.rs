use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;

use crate::database::models::{NewUser, Role};
use crate::database::StoreError;
use crate::error::ApiError;
use crate::extract::JsonOrForm;
use crate::state::AppState;

use super::{hash_blocking, required};

#[derive(Debug, Default, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub answer: Option<String>,
}

/// POST /api/v1/auth/register - Create a user account
///
/// All of `name`, `email`, `password`, `phone`, `address` and `answer` are
/// required. Registering an email twice is not an error: the reply carries
/// `success: false` and asks the caller to log in instead.
pub async fn post(
    State(state): State<AppState>,
    JsonOrForm(payload): JsonOrForm<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut missing = Vec::new();
    let fields = (
        required(payload.name, "name", &mut missing),
        required(payload.email, "email", &mut missing),
        required(payload.password, "password", &mut missing),
        required(payload.phone, "phone", &mut missing),
        required(payload.address, "address", &mut missing),
        required(payload.answer, "answer", &mut missing),
    );
    let (Some(name), Some(email), Some(password), Some(phone), Some(address), Some(answer)) = fields else {
        tracing::warn!("Registration rejected, missing fields: {:?}", missing);
        return Err(ApiError::missing_fields(&missing));
    };

    if state.store.find_user_by_email(&email).await?.is_some() {
        return Ok(already_registered());
    }

    let password_hash = hash_blocking(password, state.config.security.bcrypt_cost).await?;

    let new_user = NewUser {
        name,
        email,
        password_hash,
        phone,
        address,
        answer,
        role: Role::User,
    };

    match state.store.create_user(new_user).await {
        Ok(user) => {
            tracing::info!("Registered user {}", user.email);
            Ok((
                StatusCode::CREATED,
                Json(json!({
                    "success": true,
                    "message": "User registered successfully",
                    "user": user
                })),
            ))
        }
        // Lost a race with a concurrent registration for the same email
        Err(StoreError::Conflict(_)) => Ok(already_registered()),
        Err(e) => Err(e.into()),
    }
}

fn already_registered() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "success": false,
            "message": "Already registered, please login"
        })),
    )
}
