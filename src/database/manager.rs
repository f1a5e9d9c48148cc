use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::info;

use super::store::StoreError;
use crate::config::DatabaseConfig;

/// Schema bootstrap, applied on every startup. Unique indexes on `email`
/// back the atomic upserts in `PgStore`.
const SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        phone TEXT NOT NULL,
        address TEXT NOT NULL,
        answer TEXT NOT NULL,
        role INTEGER NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS dashboards (
        id UUID PRIMARY KEY,
        email TEXT NOT NULL UNIQUE,
        income BIGINT[] NOT NULL,
        expense_arr BIGINT[] NOT NULL,
        amount_to_pay BIGINT NOT NULL,
        amount_to_receive BIGINT NOT NULL,
        current_balance BIGINT NOT NULL,
        over_due BIGINT NOT NULL,
        expenses BIGINT NOT NULL,
        followers BIGINT NOT NULL,
        projects BIGINT NOT NULL,
        records BIGINT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS budgets (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        period TEXT NOT NULL,
        description TEXT NOT NULL,
        amount DOUBLE PRECISION NOT NULL,
        expense DOUBLE PRECISION NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
        updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS documents (
        id UUID PRIMARY KEY,
        collection TEXT NOT NULL,
        data JSONB NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "CREATE INDEX IF NOT EXISTS documents_collection_idx ON documents (collection, created_at)",
];

/// Owns the lifecycle of the process-wide connection pool
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open the pool once at startup
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, StoreError> {
        let url = config
            .url
            .as_deref()
            .ok_or(StoreError::ConfigMissing("DATABASE_URL"))?;
        let target = Self::describe_target(url)?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(url)
            .await?;

        info!("Created database pool for: {}", target);
        Ok(pool)
    }

    /// Create tables and indexes if they do not exist yet
    pub async fn bootstrap(pool: &PgPool) -> Result<(), StoreError> {
        for statement in SCHEMA {
            sqlx::query(statement).execute(pool).await?;
        }
        info!("Database schema ready");
        Ok(())
    }

    /// Close the pool (e.g., on shutdown)
    pub async fn close(pool: PgPool) {
        pool.close().await;
        info!("Closed database pool");
    }

    /// `host:port/database` of a connection URL, without credentials
    fn describe_target(url: &str) -> Result<String, StoreError> {
        let parsed = url::Url::parse(url).map_err(|_| StoreError::InvalidDatabaseUrl)?;
        let host = parsed.host_str().ok_or(StoreError::InvalidDatabaseUrl)?;
        let port = parsed.port().map(|p| format!(":{}", p)).unwrap_or_default();
        Ok(format!("{}{}{}", host, port, parsed.path()))
    }
}
