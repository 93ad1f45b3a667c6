// Application state module
// Shared state for the request path, immutable after startup

use std::sync::atomic::AtomicBool;

use super::types::Config;

/// Application state shared across connections
pub struct AppState {
    pub config: Config,

    /// Cached access-log flag so the per-request check is lock-free
    pub cached_access_log: AtomicBool,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            config: config.clone(),
            cached_access_log: AtomicBool::new(config.logging.access_log),
        }
    }
}
