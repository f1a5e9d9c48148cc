// handlers/auth/mod.rs - Account handlers mounted under /api/v1/auth
//
// register/login/forgot-password are public; the guard probes are mounted
// behind `require_sign_in` (and `require_admin` where noted) in routes.rs.

pub mod guard; //    GET  /test, /user-auth, /admin-auth
pub mod login; //    POST /login
pub mod password; // POST /forgot-password
pub mod register; // POST /register

pub use guard::{admin_auth, test, user_auth};
pub use login::post as login_post;
pub use password::forgot_password;
pub use register::post as register_post;

use crate::auth::{hash_password, verify_password};
use crate::error::{ApiError, INTERNAL_ERROR_MESSAGE};

/// Keep a non-blank field, otherwise record it as missing
fn required(value: Option<String>, field: &'static str, missing: &mut Vec<&'static str>) -> Option<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Some(v),
        _ => {
            missing.push(field);
            None
        }
    }
}

/// bcrypt is CPU-bound; keep it off the async workers
async fn hash_blocking(password: String, cost: u32) -> Result<String, ApiError> {
    tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .map_err(|e| {
            tracing::error!("Password hashing task failed: {}", e);
            ApiError::internal_server_error(INTERNAL_ERROR_MESSAGE)
        })?
        .map_err(|e| {
            tracing::error!("{}", e);
            ApiError::internal_server_error(INTERNAL_ERROR_MESSAGE)
        })
}

async fn verify_blocking(password: String, hash: String) -> Result<bool, ApiError> {
    tokio::task::spawn_blocking(move || verify_password(&password, &hash))
        .await
        .map_err(|e| {
            tracing::error!("Password verification task failed: {}", e);
            ApiError::internal_server_error(INTERNAL_ERROR_MESSAGE)
        })
}
