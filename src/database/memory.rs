use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{BudgetRecord, Collection, DashboardRecord, Document, NewBudget, NewUser, User};
use super::store::{Store, StoreError};

#[derive(Default)]
struct Tables {
    dashboards: Vec<DashboardRecord>,
    budgets: Vec<BudgetRecord>,
    users: Vec<User>,
    documents: HashMap<Collection, Vec<Document>>,
}

/// In-process store for demo runs and tests. Each operation holds the table
/// lock for its whole read-modify-write, so upserts are atomic.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn dashboards(&self) -> Vec<DashboardRecord> {
        self.tables.read().await.dashboards.clone()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn upsert_dashboard(&self, record: DashboardRecord) -> Result<DashboardRecord, StoreError> {
        let mut tables = self.tables.write().await;

        match tables.dashboards.iter().position(|d| d.email == record.email) {
            Some(index) => {
                let existing = &mut tables.dashboards[index];
                *existing = DashboardRecord {
                    id: existing.id,
                    created_at: existing.created_at,
                    ..record
                };
                Ok(existing.clone())
            }
            None => {
                tables.dashboards.push(record.clone());
                Ok(record)
            }
        }
    }

    async fn upsert_budget(&self, budget: NewBudget) -> Result<BudgetRecord, StoreError> {
        let mut tables = self.tables.write().await;

        match tables.budgets.iter().position(|b| b.email == budget.email) {
            Some(index) => {
                let existing = &mut tables.budgets[index];
                budget.apply_to(existing);
                Ok(existing.clone())
            }
            None => {
                let record = budget.into_record();
                tables.budgets.push(record.clone());
                Ok(record)
            }
        }
    }

    async fn list_budgets(&self) -> Result<Vec<BudgetRecord>, StoreError> {
        Ok(self.tables.read().await.budgets.clone())
    }

    async fn delete_budget(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut tables = self.tables.write().await;
        let before = tables.budgets.len();
        tables.budgets.retain(|b| b.id != id);
        Ok(tables.budgets.len() != before)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.write().await;

        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::Conflict(format!("email '{}' already registered", user.email)));
        }

        let user = user.into_user();
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn update_password(&self, id: Uuid, password_hash: String) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let user = tables
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| StoreError::Query(format!("no user with id {}", id)))?;
        user.password_hash = password_hash;
        Ok(())
    }

    async fn insert_document(&self, collection: Collection, data: Value) -> Result<Document, StoreError> {
        let document = Document::new(collection, data);
        let mut tables = self.tables.write().await;
        tables
            .documents
            .entry(collection)
            .or_default()
            .push(document.clone());
        Ok(document)
    }

    async fn list_documents(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.documents.get(&collection).cloned().unwrap_or_default())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
