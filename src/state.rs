use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::Store;

/// Shared by every handler. The store is opened once at startup and
/// dropped (after the pool is closed) at shutdown.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
