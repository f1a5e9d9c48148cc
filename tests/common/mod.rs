#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use ledgerline::auth::hash_password;
use ledgerline::config::AppConfig;
use ledgerline::database::models::{
    BudgetRecord, Collection, DashboardRecord, Document, NewBudget, NewUser, Role, User,
};
use ledgerline::database::{MemoryStore, Store, StoreError};
use ledgerline::AppState;
use serde_json::{json, Value};
use uuid::Uuid;

pub const LANDING_PAGE: &str = "<html><body>ledgerline</body></html>";
pub const PASSWORD: &str = "correct horse";

/// A live server on a free port backed by its own in-memory store
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    pub store: MemoryStore,
    pub client: reqwest::Client,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Insert a user straight into the store
    pub async fn seed_user(&self, email: &str, role: Role) -> Result<()> {
        self.store
            .create_user(NewUser {
                name: "Seeded".to_string(),
                email: email.to_string(),
                password_hash: hash_password(PASSWORD, 4)?,
                phone: "555-0100".to_string(),
                address: "1 Test Way".to_string(),
                answer: "blue".to_string(),
                role,
            })
            .await?;
        Ok(())
    }

    /// Log in and return the issued token
    pub async fn login(&self, email: &str) -> Result<String> {
        let body: Value = self
            .client
            .post(self.url("/api/v1/auth/login"))
            .json(&json!({ "email": email, "password": PASSWORD }))
            .send()
            .await?
            .json()
            .await?;
        body["token"]
            .as_str()
            .map(str::to_string)
            .with_context(|| format!("no token in login response: {}", body))
    }
}

pub async fn spawn_server() -> Result<TestServer> {
    spawn_server_with(|_| {}).await
}

/// Like `spawn_server`, with a chance to adjust the config first
pub async fn spawn_server_with(configure: impl FnOnce(&mut AppConfig)) -> Result<TestServer> {
    let store = MemoryStore::new();
    let (port, base_url) = serve(Arc::new(store.clone()), configure).await?;

    Ok(TestServer {
        port,
        base_url,
        store,
        client: reqwest::Client::new(),
    })
}

/// A live server whose every store call fails
pub struct FailingServer {
    pub base_url: String,
    pub client: reqwest::Client,
}

impl FailingServer {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

pub async fn spawn_failing_server() -> Result<FailingServer> {
    let (_, base_url) = serve(Arc::new(FailingStore), |_| {}).await?;
    Ok(FailingServer {
        base_url,
        client: reqwest::Client::new(),
    })
}

async fn serve(
    store: Arc<dyn Store>,
    configure: impl FnOnce(&mut AppConfig),
) -> Result<(u16, String)> {
    let port = portpicker::pick_unused_port().context("failed to pick free port")?;
    let base_url = format!("http://127.0.0.1:{}", port);

    let mut config = AppConfig::development();
    config.server.port = port;
    config.security.bcrypt_cost = 4;
    config.assets.index_file = landing_page()?;
    configure(&mut config);

    let app = ledgerline::app(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
        .await
        .context("failed to bind test listener")?;
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });

    Ok((port, base_url))
}

/// Store standing in for a database that rejects every query
pub struct FailingStore;

fn query_failed() -> StoreError {
    StoreError::Query("relation does not exist".to_string())
}

#[async_trait]
impl Store for FailingStore {
    async fn upsert_dashboard(&self, _: DashboardRecord) -> Result<DashboardRecord, StoreError> {
        Err(query_failed())
    }

    async fn upsert_budget(&self, _: NewBudget) -> Result<BudgetRecord, StoreError> {
        Err(query_failed())
    }

    async fn list_budgets(&self) -> Result<Vec<BudgetRecord>, StoreError> {
        Err(query_failed())
    }

    async fn delete_budget(&self, _: Uuid) -> Result<bool, StoreError> {
        Err(query_failed())
    }

    async fn create_user(&self, _: NewUser) -> Result<User, StoreError> {
        Err(query_failed())
    }

    async fn find_user_by_email(&self, _: &str) -> Result<Option<User>, StoreError> {
        Err(query_failed())
    }

    async fn find_user(&self, _: Uuid) -> Result<Option<User>, StoreError> {
        Err(query_failed())
    }

    async fn update_password(&self, _: Uuid, _: String) -> Result<(), StoreError> {
        Err(query_failed())
    }

    async fn insert_document(&self, _: Collection, _: Value) -> Result<Document, StoreError> {
        Err(query_failed())
    }

    async fn list_documents(&self, _: Collection) -> Result<Vec<Document>, StoreError> {
        Err(query_failed())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

fn landing_page() -> Result<PathBuf> {
    let dir = std::env::temp_dir().join(format!("ledgerline-{}", uuid::Uuid::new_v4().simple()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("index.html");
    std::fs::write(&path, LANDING_PAGE)?;
    Ok(path)
}
