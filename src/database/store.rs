use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use super::models::{BudgetRecord, Collection, DashboardRecord, Document, NewBudget, NewUser, User};

/// Errors surfaced by a `Store` implementation
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Invalid database URL")]
    InvalidDatabaseUrl,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Persistence boundary shared by every handler.
///
/// Upserts are keyed by the logical `email` and must be atomic: concurrent
/// writes for one email leave exactly one record behind.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert the dashboard or overwrite every field of the one stored under
    /// the same email. Returns the persisted record.
    async fn upsert_dashboard(&self, record: DashboardRecord) -> Result<DashboardRecord, StoreError>;

    /// Insert the budget or update name, period, description, amount and
    /// expense of the one stored under the same email.
    async fn upsert_budget(&self, budget: NewBudget) -> Result<BudgetRecord, StoreError>;

    /// Every budget, oldest first
    async fn list_budgets(&self) -> Result<Vec<BudgetRecord>, StoreError>;

    /// Returns whether a record was removed
    async fn delete_budget(&self, id: Uuid) -> Result<bool, StoreError>;

    /// Fails with `StoreError::Conflict` when the email is taken
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    /// Fails with `StoreError::Query` when no user has the id
    async fn update_password(&self, id: Uuid, password_hash: String) -> Result<(), StoreError>;

    async fn insert_document(&self, collection: Collection, data: Value) -> Result<Document, StoreError>;

    /// Documents of one collection, oldest first
    async fn list_documents(&self, collection: Collection) -> Result<Vec<Document>, StoreError>;

    async fn health_check(&self) -> Result<(), StoreError>;
}
