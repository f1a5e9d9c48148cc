use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Catalog collections backed by schemaless documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Vendors,
    Employees,
    Items,
    Customers,
    SalesOrders,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Vendors => "vendors",
            Collection::Employees => "employees",
            Collection::Items => "items",
            Collection::Customers => "customers",
            Collection::SalesOrders => "sales_orders",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Document {
    pub id: Uuid,
    pub collection: String,
    pub data: sqlx::types::Json<Value>,
    pub created_at: DateTime<Utc>,
}

impl Document {
    pub fn new(collection: Collection, data: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            collection: collection.as_str().to_string(),
            data: sqlx::types::Json(data),
            created_at: Utc::now(),
        }
    }
}
