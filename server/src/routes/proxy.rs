//! `/api/*` forwarding to the upstream REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle calls same-origin `/api/...`; this handler strips the
//! prefix and replays the request against `BACKEND_URL`, passing the bearer
//! token through. Status codes and bodies come back unchanged so the client
//! sees the backend's own error messages.
//!
//! ERROR HANDLING
//! ==============
//! Forwarding disabled -> `503`; upstream unreachable or timed out -> `502`.
//! Both carry a JSON `{ "message": ... }` body, the same shape the backend
//! uses for its errors.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::{RawQuery, State};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};

use crate::state::AppState;

/// Mount point of the forwarder; stripped before replaying.
pub const API_PREFIX: &str = "/api";
/// Request headers replayed upstream.
const FORWARDED_REQUEST_HEADERS: &[&str] = &["authorization", "content-type", "accept", "accept-language"];
/// Response headers passed back to the browser.
const FORWARDED_RESPONSE_HEADERS: &[&str] = &["content-type", "cache-control", "content-disposition"];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("backend forwarding is not configured")]
    Disabled,
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Disabled => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "message": self.to_string() }))).into_response()
    }
}

/// Upstream path for a request path, still percent-encoded.
#[must_use]
pub fn upstream_path(request_path: &str) -> &str {
    request_path.strip_prefix(API_PREFIX).unwrap_or(request_path)
}

/// `base` + `/path` + optional `?query`.
#[must_use]
pub fn upstream_url(base: &str, path: &str, query: Option<&str>) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    match query.filter(|q| !q.is_empty()) {
        Some(q) => format!("{base}/{path}?{q}"),
        None => format!("{base}/{path}"),
    }
}

#[must_use]
pub fn forwardable_header(name: &HeaderName, allowed: &[&str]) -> bool {
    allowed.iter().any(|a| name.as_str().eq_ignore_ascii_case(a))
}

fn filter_headers(headers: &HeaderMap, allowed: &[&str]) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| forwardable_header(name, allowed))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// `ANY /api/{*path}`.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let base = state.backend_url.as_deref().ok_or(ProxyError::Disabled)?;
    let url = upstream_url(base, upstream_path(uri.path()), query.as_deref());

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(filter_headers(&headers, FORWARDED_REQUEST_HEADERS))
        .body(body)
        .send()
        .await
        .inspect_err(|e| tracing::warn!(error = %e, %method, %url, "backend request failed"))?;

    let status = upstream.status();
    tracing::debug!(%method, %url, status = status.as_u16(), "forwarded");
    let response_headers = filter_headers(upstream.headers(), FORWARDED_RESPONSE_HEADERS);
    let bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    response.headers_mut().extend(response_headers);
    Ok(response)
}
