use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ledgerline::config::AppConfig;
use ledgerline::database::{manager::DatabaseManager, MemoryStore, PgStore, Store};
use ledgerline::AppState;

#[derive(Debug, Parser)]
#[command(name = "ledgerline", about = "Bookkeeping backend server", version)]
struct Args {
    /// Port to listen on (overrides PORT)
    #[arg(long)]
    port: Option<u16>,

    /// Mode label for the startup log (overrides MODE)
    #[arg(long)]
    mode: Option<String>,

    /// Keep everything in memory instead of connecting to Postgres
    #[arg(long)]
    memory: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("ledgerline=info,tower_http=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = AppConfig::from_env();
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(mode) = args.mode {
        config.server.mode = mode;
    }
    anyhow::ensure!(
        !config.security.jwt_secret.is_empty(),
        "JWT_SECRET must be set in {} mode",
        config.environment.as_str()
    );

    let (store, pool) = if args.memory {
        tracing::warn!("Running with the in-memory store; data is lost on exit");
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        (store, None)
    } else {
        let pool = DatabaseManager::connect(&config.database)
            .await
            .context("failed to connect to database")?;
        DatabaseManager::bootstrap(&pool)
            .await
            .context("failed to prepare database schema")?;
        let store: Arc<dyn Store> = Arc::new(PgStore::new(pool.clone()));
        (store, Some(pool))
    };

    let port = config.server.port;
    let mode = config.server.mode.clone();
    let app = ledgerline::app(AppState::new(store, config));

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    tracing::info!("Server started {} on port {}", mode, port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    if let Some(pool) = pool {
        DatabaseManager::close(pool).await;
    }
    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
