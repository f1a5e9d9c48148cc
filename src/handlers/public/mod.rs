// handlers/public/mod.rs - Unauthenticated pages and probes
//
// The landing page and static asset directories are served by tower-http
// services wired in routes.rs; only the dynamic endpoints live here.

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::json;

use crate::state::AppState;

/// GET /hi - Liveness check for humans
pub async fn hi() -> Html<&'static str> {
    tracing::info!("hi url is working.");
    Html("<h1>Seems like this is working.</h1>")
}

/// GET /health - Liveness check including the store
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
