// Probe endpoints for the client's route guards. The checks themselves run
// in middleware; reaching these handlers means they passed.

use axum::Json;
use serde_json::{json, Value};

/// GET /api/v1/auth/test - sign-in + admin
pub async fn test() -> &'static str {
    "Protected Routes"
}

/// GET /api/v1/auth/user-auth - sign-in
pub async fn user_auth() -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// GET /api/v1/auth/admin-auth - sign-in + admin
pub async fn admin_auth() -> Json<Value> {
    Json(json!({ "ok": true }))
}
