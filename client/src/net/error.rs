//! Error type for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every backend call resolves to `Result<T, ApiError>`. Pages decide what an
//! error means for navigation; this module only classifies the failure and
//! extracts the server-supplied message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("no se pudo contactar al servidor: {0}")]
    Network(String),
    #[error("sesión expirada")]
    Unauthorized,
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("respuesta inválida del servidor: {0}")]
    Decode(String),
    #[error("no disponible durante el renderizado en servidor")]
    Unavailable,
    /// Client-side precondition failed before any request was sent.
    #[error("{0}")]
    Invalid(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return Self::Unauthorized;
        }
        Self::Status { status, message: server_message(status, body) }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<MessageRepr>,
    #[serde(default)]
    error: Option<String>,
}

/// Validation errors sometimes come back as a list of messages.
#[derive(Deserialize)]
#[serde(untagged)]
enum MessageRepr {
    One(String),
    Many(Vec<String>),
}

/// Pick the human-readable message out of an error body.
fn server_message(status: u16, body: &str) -> String {
    let parsed = serde_json::from_str::<ErrorBody>(body).ok();
    let message = parsed.and_then(|b| {
        let from_message = match b.message {
            Some(MessageRepr::One(m)) => Some(m),
            Some(MessageRepr::Many(list)) => Some(list.join(", ")),
            None => None,
        };
        from_message.or(b.error)
    });
    message
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("request failed: {status}"))
}
