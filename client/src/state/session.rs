//! Persisted login session and its reactive mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session lives in `localStorage` under three fixed keys and is cleared
//! as a unit on logout. `AuthState` mirrors it in a signal so the route guard
//! and layout chrome re-render when it changes.
//!
//! DESIGN
//! ======
//! The role is normalized at the storage boundary: stored records may carry
//! it as a plain string or as a `{ "nombre": ... }` object, but `SessionUser`
//! always exposes a single `String` and is written back in that shape.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::net::types::{deserialize_id, deserialize_opt_id};
use crate::util::storage;

pub const USER_KEY: &str = "user";
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// The logged-in user as stored alongside the tokens.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(alias = "name", alias = "nombreCompleto")]
    pub full_name: String,
    pub email: String,
    #[serde(alias = "rol", deserialize_with = "deserialize_role")]
    pub role: String,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub company_id: Option<String>,
}

impl SessionUser {
    /// Whether the user's role is in `allowed` (exact, case-insensitive).
    #[must_use]
    pub fn has_role(&self, allowed: &[&str]) -> bool {
        allowed.iter().any(|r| r.eq_ignore_ascii_case(&self.role))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RoleRepr {
    Name(String),
    Nested {
        #[serde(alias = "name")]
        nombre: String,
    },
}

fn deserialize_role<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let role = match RoleRepr::deserialize(deserializer)? {
        RoleRepr::Name(name) | RoleRepr::Nested { nombre: name } => name,
    };
    Ok(role.trim().to_owned())
}

/// Response body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    pub user: SessionUser,
}

/// Point-in-time view of the stored session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub token: Option<String>,
    /// `None` when absent or when the stored record does not parse.
    pub user: Option<SessionUser>,
}

impl SessionSnapshot {
    /// Build a snapshot from raw storage values.
    #[must_use]
    pub fn from_raw(token: Option<String>, raw_user: Option<&str>) -> Self {
        let token = token.filter(|t| !t.trim().is_empty());
        let user = raw_user.and_then(parse_user);
        Self { token, user }
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.role.as_str())
    }
}

/// Parse a stored user record. Any failure reads as "not authenticated".
#[must_use]
pub fn parse_user(raw: &str) -> Option<SessionUser> {
    match serde_json::from_str::<SessionUser>(raw) {
        Ok(user) => Some(user),
        Err(e) => {
            leptos::logging::warn!("stored session user is unreadable: {e}");
            None
        }
    }
}

/// Read the session from `localStorage`.
pub fn load() -> SessionSnapshot {
    let raw_user = storage::get_string(USER_KEY);
    SessionSnapshot::from_raw(storage::get_string(ACCESS_TOKEN_KEY), raw_user.as_deref())
}

/// Persist a fresh login. The user record is written in normalized form.
pub fn store(login: &LoginResponse) {
    storage::set_string(ACCESS_TOKEN_KEY, &login.access_token);
    match &login.refresh_token {
        Some(token) => storage::set_string(REFRESH_TOKEN_KEY, token),
        None => storage::remove(REFRESH_TOKEN_KEY),
    }
    match serde_json::to_string(&login.user) {
        Ok(raw) => storage::set_string(USER_KEY, &raw),
        Err(e) => leptos::logging::error!("failed to serialize session user: {e}"),
    }
}

/// Remove the user record and both tokens.
pub fn clear() {
    storage::remove(USER_KEY);
    storage::remove(ACCESS_TOKEN_KEY);
    storage::remove(REFRESH_TOKEN_KEY);
}

pub fn access_token() -> Option<String> {
    storage::get_string(ACCESS_TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

/// Reactive auth state provided at the app root.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: SessionSnapshot,
    /// True until the browser has read `localStorage`.
    pub loading: bool,
}

impl AuthState {
    #[must_use]
    pub fn pending() -> Self {
        Self { session: SessionSnapshot::default(), loading: true }
    }

    #[must_use]
    pub fn loaded(session: SessionSnapshot) -> Self {
        Self { session, loading: false }
    }

    #[must_use]
    pub fn user(&self) -> Option<&SessionUser> {
        self.session.user.as_ref()
    }

    #[must_use]
    pub fn company_id(&self) -> Option<String> {
        self.user().and_then(|u| u.company_id.clone())
    }

    #[must_use]
    pub fn has_role(&self, allowed: &[&str]) -> bool {
        self.user().is_some_and(|u| u.has_role(allowed))
    }
}
