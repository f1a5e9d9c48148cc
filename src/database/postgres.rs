use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use super::models::{BudgetRecord, Collection, DashboardRecord, Document, NewBudget, NewUser, User};
use super::store::{Store, StoreError};

const DASHBOARD_COLUMNS: &str = "id, email, income, expense_arr, amount_to_pay, amount_to_receive, \
     current_balance, over_due, expenses, followers, projects, records, created_at, updated_at";

const BUDGET_COLUMNS: &str =
    "id, name, email, period, description, amount, expense, created_at, updated_at";

const USER_COLUMNS: &str =
    "id, name, email, password_hash, phone, address, answer, role, created_at";

/// Postgres-backed store sharing the process-wide pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn upsert_dashboard(&self, record: DashboardRecord) -> Result<DashboardRecord, StoreError> {
        let query = format!(
            r#"
            INSERT INTO dashboards ({DASHBOARD_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            ON CONFLICT (email) DO UPDATE SET
                income = EXCLUDED.income,
                expense_arr = EXCLUDED.expense_arr,
                amount_to_pay = EXCLUDED.amount_to_pay,
                amount_to_receive = EXCLUDED.amount_to_receive,
                current_balance = EXCLUDED.current_balance,
                over_due = EXCLUDED.over_due,
                expenses = EXCLUDED.expenses,
                followers = EXCLUDED.followers,
                projects = EXCLUDED.projects,
                records = EXCLUDED.records,
                updated_at = EXCLUDED.updated_at
            RETURNING {DASHBOARD_COLUMNS}
            "#
        );

        let saved = sqlx::query_as::<_, DashboardRecord>(&query)
            .bind(record.id)
            .bind(&record.email)
            .bind(&record.income)
            .bind(&record.expense_arr)
            .bind(record.amount_to_pay)
            .bind(record.amount_to_receive)
            .bind(record.current_balance)
            .bind(record.over_due)
            .bind(record.expenses)
            .bind(record.followers)
            .bind(record.projects)
            .bind(record.records)
            .bind(record.created_at)
            .bind(record.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(saved)
    }

    async fn upsert_budget(&self, budget: NewBudget) -> Result<BudgetRecord, StoreError> {
        let record = budget.into_record();
        let query = format!(
            r#"
            INSERT INTO budgets ({BUDGET_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (email) DO UPDATE SET
                name = EXCLUDED.name,
                period = EXCLUDED.period,
                description = EXCLUDED.description,
                amount = EXCLUDED.amount,
                expense = EXCLUDED.expense,
                updated_at = EXCLUDED.updated_at
            RETURNING {BUDGET_COLUMNS}
            "#
        );

        let saved = sqlx::query_as::<_, BudgetRecord>(&query)
            .bind(record.id)
            .bind(&record.name)
            .bind(&record.email)
            .bind(&record.period)
            .bind(&record.description)
            .bind(record.amount)
            .bind(record.expense)
            .bind(record.created_at)
            .bind(record.updated_at)
            .fetch_one(&self.pool)
            .await?;

        Ok(saved)
    }

    async fn list_budgets(&self) -> Result<Vec<BudgetRecord>, StoreError> {
        let query = format!("SELECT {BUDGET_COLUMNS} FROM budgets ORDER BY created_at, id");
        let budgets = sqlx::query_as::<_, BudgetRecord>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(budgets)
    }

    async fn delete_budget(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM budgets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn create_user(&self, user: NewUser) -> Result<User, StoreError> {
        let user = user.into_user();
        let query = format!(
            r#"
            INSERT INTO users ({USER_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {USER_COLUMNS}
            "#
        );

        sqlx::query_as::<_, User>(&query)
            .bind(user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.phone)
            .bind(&user.address)
            .bind(&user.answer)
            .bind(user.role)
            .bind(user.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    StoreError::Conflict(format!("email '{}' already registered", user.email))
                }
                other => StoreError::Sqlx(other),
            })
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn find_user(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let query = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    async fn update_password(&self, id: Uuid, password_hash: String) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id)
            .bind(password_hash)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::Query(format!("no user with id {}", id)));
        }
        Ok(())
    }

    async fn insert_document(&self, collection: Collection, data: Value) -> Result<Document, StoreError> {
        let document = Document::new(collection, data);
        let saved = sqlx::query_as::<_, Document>(
            r#"
            INSERT INTO documents (id, collection, data, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, collection, data, created_at
            "#,
        )
        .bind(document.id)
        .bind(&document.collection)
        .bind(&document.data)
        .bind(document.created_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }

    async fn list_documents(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let documents = sqlx::query_as::<_, Document>(
            "SELECT id, collection, data, created_at FROM documents WHERE collection = $1 ORDER BY created_at, id",
        )
        .bind(collection.as_str())
        .fetch_all(&self.pool)
        .await?;
        Ok(documents)
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        Ok(())
    }
}
