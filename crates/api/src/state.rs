use std::sync::Arc;

use bidboard_store::AdStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (everything is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// The canonical advertisement collection.
    pub store: Arc<AdStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
