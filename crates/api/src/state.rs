use std::sync::Arc;

use projectdesk_core::types::Timestamp;
use projectdesk_store::DataStore;
use tokio::sync::RwLock;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The in-memory data store. Each handler holds the lock for its whole
    /// request, so reads and mutations never interleave.
    pub store: Arc<RwLock<DataStore>>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: DataStore, config: ServerConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config: Arc::new(config),
        }
    }

    /// The instant time-relative views are computed against.
    pub fn now(&self) -> Timestamp {
        self.config
            .now_override
            .unwrap_or_else(|| chrono::Local::now().naive_local())
    }
}
