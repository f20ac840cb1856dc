//! Shared server state.

use std::time::Duration;

use crate::config::ServerConfig;

/// Handles shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Upstream REST API; `None` disables `/api/*` forwarding.
    pub backend_url: Option<String>,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the client build error (TLS backend initialisation).
    pub fn new(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.backend_timeout_secs))
            .build()?;
        Ok(Self { http, backend_url: config.backend_url.clone() })
    }
}
