use axum::extract::State;
use serde_json::{Map, Value};

use crate::database::models::{Collection, Document};
use crate::error::ApiError;
use crate::extract::JsonOrForm;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// Store the body as a new document in `collection`
pub async fn create(
    State(state): State<AppState>,
    collection: Collection,
    JsonOrForm(body): JsonOrForm<Map<String, Value>>,
) -> ApiResult<Document> {
    if body.is_empty() {
        tracing::warn!("Rejected empty {} document", collection.as_str());
        return Err(ApiError::bad_request(format!(
            "{} record must have at least one field",
            collection.as_str()
        )));
    }

    let document = state
        .store
        .insert_document(collection, Value::Object(body))
        .await?;

    tracing::info!("Added {} document {}", collection.as_str(), document.id);
    Ok(ApiResponse::created(document))
}

/// Every document in `collection`, oldest first
pub async fn list(State(state): State<AppState>, collection: Collection) -> ApiResult<Vec<Document>> {
    let documents = state.store.list_documents(collection).await?;
    Ok(ApiResponse::success(documents))
}
