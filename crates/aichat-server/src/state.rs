//! Application State

use std::sync::Arc;

use aichat_router::RouteTable;

use crate::config::ServerConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Route table, read-only after startup
    pub table: Arc<RouteTable>,

    /// Host configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            table: Arc::new(config.router.table()),
            config: Arc::new(config),
        }
    }
}
