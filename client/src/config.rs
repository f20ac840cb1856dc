//! Build-time client configuration.
//!
//! `ACTIVOS_API_BASE` is read at compile time (the WASM bundle has no
//! process environment). The default targets the host server's `/api`
//! forwarder so requests stay same-origin.

pub const DEFAULT_API_BASE: &str = "/api";

/// Landing route used after login and on authorization mismatch.
pub const DEFAULT_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/login";
pub const RETURN_URL_PARAM: &str = "returnUrl";

pub const APP_TITLE: &str = "Control de Activos";

/// Roles allowed to manage companies.
pub const ADMIN_ROLES: &[&str] = &["admin"];
/// Roles allowed to create or edit organizational records.
pub const MANAGER_ROLES: &[&str] = &["admin", "manager"];

#[must_use]
pub fn api_base() -> &'static str {
    match option_env!("ACTIVOS_API_BASE") {
        Some(base) if !base.trim().is_empty() => base,
        _ => DEFAULT_API_BASE,
    }
}
