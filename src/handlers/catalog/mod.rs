// handlers/catalog/mod.rs - Schemaless catalog collections under /api/v1/auth
//
// Vendors, employees, items, customers and sales orders share one shape: an
// arbitrary non-empty object stored as a document in its collection.

pub mod record;

use axum::extract::State;
use serde_json::{Map, Value};

use crate::database::models::{Collection, Document};
use crate::extract::JsonOrForm;
use crate::middleware::ApiResult;
use crate::state::AppState;

/// POST /api/v1/auth/addVendor
pub async fn add_vendor(state: State<AppState>, body: JsonOrForm<Map<String, Value>>) -> ApiResult<Document> {
    record::create(state, Collection::Vendors, body).await
}

/// POST /api/v1/auth/addEmployee
pub async fn add_employee(state: State<AppState>, body: JsonOrForm<Map<String, Value>>) -> ApiResult<Document> {
    record::create(state, Collection::Employees, body).await
}

/// POST /api/v1/auth/addItem
pub async fn add_item(state: State<AppState>, body: JsonOrForm<Map<String, Value>>) -> ApiResult<Document> {
    record::create(state, Collection::Items, body).await
}

/// POST /api/v1/auth/addCustomer
pub async fn add_customer(state: State<AppState>, body: JsonOrForm<Map<String, Value>>) -> ApiResult<Document> {
    record::create(state, Collection::Customers, body).await
}

/// POST /api/v1/auth/new-sales-order
pub async fn new_sales_order(state: State<AppState>, body: JsonOrForm<Map<String, Value>>) -> ApiResult<Document> {
    record::create(state, Collection::SalesOrders, body).await
}

/// GET /api/v1/auth/displayvendor
pub async fn display_vendor(state: State<AppState>) -> ApiResult<Vec<Document>> {
    record::list(state, Collection::Vendors).await
}

/// GET /api/v1/auth/displaycustomer
pub async fn display_customer(state: State<AppState>) -> ApiResult<Vec<Document>> {
    record::list(state, Collection::Customers).await
}

/// GET /api/v1/auth/displayitem
pub async fn display_item(state: State<AppState>) -> ApiResult<Vec<Document>> {
    record::list(state, Collection::Items).await
}
