//! Helpers shared by several pages.

#[cfg(test)]
#[path = "common_test.rs"]
mod common_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::net::error::ApiError;
use crate::net::types::{Asset, Employee};
use crate::state::session::AuthState;
use crate::util::format::MISSING;

/// Title of the warning shown when client-side validation rejects a form.
pub const INVALID_FORM_TITLE: &str = "Revise el formulario";

/// Company the current session is scoped to.
///
/// # Errors
///
/// Returns `ApiError::Invalid` when the session has no company assigned, so
/// the page load fails through the usual notification path.
pub fn company_of(auth: &AuthState) -> Result<String, ApiError> {
    auth.company_id()
        .ok_or_else(|| ApiError::Invalid("La sesión no tiene una empresa asignada.".to_owned()))
}

/// `company_of` for the auth signal in context, read untracked.
pub fn session_company() -> Result<String, ApiError> {
    let auth = expect_context::<RwSignal<AuthState>>();
    auth.with_untracked(company_of)
}

/// Id of the signed-in user, recorded on assignments and returns.
pub fn session_user_id() -> Option<String> {
    let auth = expect_context::<RwSignal<AuthState>>();
    auth.with_untracked(|a| a.user().map(|u| u.id.clone()))
}

/// Route parameter `key` (untracked), empty when absent.
pub fn route_param(key: &str) -> String {
    use_params_map().with_untracked(|p| p.get(key)).unwrap_or_default()
}

/// Query parameter `key` (untracked), `None` when absent or blank.
pub fn query_param(key: &str) -> Option<String> {
    use_query_map()
        .with_untracked(|q| q.get(key))
        .filter(|v| !v.trim().is_empty())
}

#[must_use]
pub fn employee_name(employees: &[Employee], id: Option<&str>) -> String {
    id.and_then(|id| employees.iter().find(|e| e.id == id))
        .map_or_else(|| MISSING.to_owned(), |e| e.name.clone())
}

#[must_use]
pub fn asset_label(assets: &[Asset], id: &str) -> String {
    assets
        .iter()
        .find(|a| a.id == id)
        .map_or_else(|| format!("#{id}"), |a| format!("{} · {}", a.code, a.name))
}

/// `(value, text)` pairs for a `SelectField`.
#[must_use]
pub fn employee_options(employees: &[Employee]) -> Vec<(String, String)> {
    employees.iter().map(|e| (e.id.clone(), e.name.clone())).collect()
}

/// Display text for an optional field.
#[must_use]
pub fn or_missing(value: Option<&str>) -> String {
    value.filter(|v| !v.trim().is_empty()).unwrap_or(MISSING).to_owned()
}
