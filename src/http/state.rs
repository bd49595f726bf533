//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::EngineConfig;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Engine configuration (display timezone, block threshold)
    pub config: Arc<EngineConfig>,
}

impl AppState {
    /// Create a new application state with the given engine configuration.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}
