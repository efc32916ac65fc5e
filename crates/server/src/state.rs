//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::PaymentServerConfig;

/// Application state shared across all handlers.
///
/// The server is stateless beyond its configuration; this struct is
/// cheaply cloneable via `Arc`.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: PaymentServerConfig,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: PaymentServerConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &PaymentServerConfig {
        &self.inner.config
    }
}
