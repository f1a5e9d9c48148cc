use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use super::auth::AuthUser;
use crate::error::ApiError;
use crate::state::AppState;

/// Must run after `require_sign_in`. Loads the signed-in user and rejects
/// anyone without admin standing.
pub async fn require_admin(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_user = request
        .extensions()
        .get::<AuthUser>()
        .cloned()
        .ok_or_else(|| ApiError::unauthorized("Sign-in required before admin check"))?;

    let user = state.store.find_user(auth_user.user_id).await?;

    match user {
        Some(user) if user.is_admin() => {
            tracing::debug!("Admin check passed for {}", user.email);
            Ok(next.run(request).await)
        }
        _ => {
            tracing::warn!("Admin check failed for {}", auth_user.email);
            Err(ApiError::unauthorized("UnAuthorized Access"))
        }
    }
}
