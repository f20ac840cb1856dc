//! Host server configuration parsed from environment variables.
//!
//! Optional:
//! - `PORT`: listen port, default 3000
//! - `BACKEND_URL`: upstream REST API for `/api/*`; forwarding is disabled
//!   when absent
//! - `BACKEND_TIMEOUT_SECS`: upstream request timeout, default 30

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("BACKEND_URL must start with http:// or https://, got {0:?}")]
    BackendUrl(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Base URL without a trailing slash.
    pub backend_url: Option<String>,
    pub backend_timeout_secs: u64,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unparseable port or a non-HTTP backend URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for an unparseable port or a non-HTTP backend URL.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match non_empty(lookup("PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };

        let backend_url = match non_empty(lookup("BACKEND_URL")) {
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => {
                Some(raw.trim_end_matches('/').to_string())
            }
            Some(raw) => return Err(ConfigError::BackendUrl(raw)),
            None => None,
        };

        let backend_timeout_secs = non_empty(lookup("BACKEND_TIMEOUT_SECS"))
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_BACKEND_TIMEOUT_SECS);

        Ok(Self { port, backend_url, backend_timeout_secs })
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
