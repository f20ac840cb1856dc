//! REST facade for the asset-tracking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with the stored
//! bearer token attached. Server-side (SSR): every call resolves to
//! `ApiError::Unavailable`, since data is only fetched in the browser.
//!
//! ERROR HANDLING
//! ==============
//! One function per backend operation, each returning `Result<T, ApiError>`.
//! No retry, caching, or batching; failures carry the server's message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::endpoints;
use super::error::ApiError;
use super::types::{
    Area, AreaInput, Asset, AssetInput, AssetQr, Assignment, AssignmentInput, AssignmentReturn, Category,
    CategoryInput, Company, CompanyInput, Employee, EmployeeInput, LoginRequest, Maintenance, MaintenanceInput,
    Site, SiteInput,
};
use crate::state::session::LoginResponse;

// =============================================================================
// TRANSPORT
// =============================================================================

#[cfg(feature = "hydrate")]
mod transport {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use crate::net::endpoints;
    use crate::net::error::ApiError;
    use crate::net::types::Envelope;

    fn authorized(builder: RequestBuilder) -> RequestBuilder {
        match crate::state::session::access_token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        let status = resp.status();
        let ok = resp.ok();
        let body = resp.text().await?;
        if !ok {
            leptos::logging::warn!("api request failed: {} {status}", resp.url());
            return Err(ApiError::from_response(status, &body));
        }
        // Empty 2xx bodies decode as JSON `null` so `()` responses work.
        let body = if body.trim().is_empty() { "null" } else { body.as_str() };
        let envelope: Envelope<T> = serde_json::from_str(body)?;
        Ok(envelope.into_inner())
    }

    pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let resp = authorized(Request::get(&endpoints::url(path))).send().await?;
        decode(resp).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        let resp = authorized(Request::post(&endpoints::url(path)))
            .json(body)?
            .send()
            .await?;
        decode(resp).await
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        let resp = authorized(Request::put(&endpoints::url(path)))
            .json(body)?
            .send()
            .await?;
        decode(resp).await
    }
}

#[cfg(not(feature = "hydrate"))]
mod transport {
    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use crate::net::error::ApiError;

    pub async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
        let _ = path;
        Err(ApiError::Unavailable)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(ApiError::Unavailable)
    }
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    transport::get(path).await
}

async fn post<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    transport::post(path, body).await
}

async fn put<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, ApiError> {
    transport::put(path, body).await
}

fn require_id(id: &str, what: &str) -> Result<(), ApiError> {
    if id.trim().is_empty() {
        return Err(ApiError::Invalid(format!("falta el identificador de {what}")));
    }
    Ok(())
}

// =============================================================================
// AUTH
// =============================================================================

/// Exchange credentials for tokens via `POST /auth/login`.
///
/// # Errors
///
/// Returns `ApiError::Unauthorized` for bad credentials, or any transport error.
pub async fn login(request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    post(endpoints::LOGIN, request).await
}

/// Best-effort server-side logout. The local session is cleared regardless.
pub async fn logout() {
    let result: Result<serde_json::Value, ApiError> = post(endpoints::LOGOUT, &serde_json::json!({})).await;
    if let Err(e) = result {
        leptos::logging::log!("logout request not acknowledged: {e}");
    }
}

// =============================================================================
// ORGANIZATION
// =============================================================================

/// # Errors
///
/// Returns the transport or server error.
pub async fn list_companies() -> Result<Vec<Company>, ApiError> {
    get(endpoints::COMPANIES).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn get_company(id: &str) -> Result<Company, ApiError> {
    require_id(id, "la empresa")?;
    get(&endpoints::company(id)).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn create_company(input: &CompanyInput) -> Result<Company, ApiError> {
    post(endpoints::COMPANIES, input).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn update_company(id: &str, input: &CompanyInput) -> Result<Company, ApiError> {
    require_id(id, "la empresa")?;
    put(&endpoints::company(id), input).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn list_sites(company_id: &str) -> Result<Vec<Site>, ApiError> {
    require_id(company_id, "la empresa")?;
    get(&endpoints::company_sites(company_id)).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn get_site(id: &str) -> Result<Site, ApiError> {
    require_id(id, "la sede")?;
    get(&endpoints::site(id)).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn create_site(input: &SiteInput) -> Result<Site, ApiError> {
    post(endpoints::SITES, input).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn list_areas(site_id: &str) -> Result<Vec<Area>, ApiError> {
    require_id(site_id, "la sede")?;
    get(&endpoints::site_areas(site_id)).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn create_area(input: &AreaInput) -> Result<Area, ApiError> {
    post(endpoints::AREAS, input).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn list_categories(company_id: &str) -> Result<Vec<Category>, ApiError> {
    require_id(company_id, "la empresa")?;
    get(&endpoints::company_categories(company_id)).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn create_category(input: &CategoryInput) -> Result<Category, ApiError> {
    post(endpoints::CATEGORIES, input).await
}

// =============================================================================
// EMPLOYEES
// =============================================================================

/// # Errors
///
/// Returns the transport or server error.
pub async fn list_employees(company_id: &str) -> Result<Vec<Employee>, ApiError> {
    require_id(company_id, "la empresa")?;
    get(&endpoints::company_employees(company_id)).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn get_employee(id: &str) -> Result<Employee, ApiError> {
    require_id(id, "el empleado")?;
    get(&endpoints::employee(id)).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn create_employee(input: &EmployeeInput) -> Result<Employee, ApiError> {
    post(endpoints::EMPLOYEES, input).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn update_employee(id: &str, input: &EmployeeInput) -> Result<Employee, ApiError> {
    require_id(id, "el empleado")?;
    put(&endpoints::employee(id), input).await
}

/// Assignment history for one employee, newest first as served.
///
/// # Errors
///
/// Returns the transport or server error.
pub async fn list_employee_assignments(employee_id: &str) -> Result<Vec<Assignment>, ApiError> {
    require_id(employee_id, "el empleado")?;
    get(&endpoints::employee_assignments(employee_id)).await
}

// =============================================================================
// ASSETS
// =============================================================================

/// # Errors
///
/// Returns the transport or server error.
pub async fn list_assets(company_id: &str) -> Result<Vec<Asset>, ApiError> {
    require_id(company_id, "la empresa")?;
    get(&endpoints::company_assets(company_id)).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn get_asset(id: &str) -> Result<Asset, ApiError> {
    require_id(id, "el activo")?;
    get(&endpoints::asset(id)).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn create_asset(input: &AssetInput) -> Result<Asset, ApiError> {
    post(endpoints::ASSETS, input).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn update_asset(id: &str, input: &AssetInput) -> Result<Asset, ApiError> {
    require_id(id, "el activo")?;
    put(&endpoints::asset(id), input).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn get_asset_qr(asset_id: &str) -> Result<AssetQr, ApiError> {
    require_id(asset_id, "el activo")?;
    get(&endpoints::asset_qr(asset_id)).await
}

// =============================================================================
// HISTORY
// =============================================================================

/// # Errors
///
/// Returns the transport or server error.
pub async fn list_asset_assignments(asset_id: &str) -> Result<Vec<Assignment>, ApiError> {
    require_id(asset_id, "el activo")?;
    get(&endpoints::asset_assignments(asset_id)).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn create_assignment(input: &AssignmentInput) -> Result<Assignment, ApiError> {
    post(endpoints::ASSIGNMENTS, input).await
}

/// Close an active assignment by recording its return date.
///
/// # Errors
///
/// Returns the transport or server error.
pub async fn return_assignment(assignment_id: &str, input: &AssignmentReturn) -> Result<Assignment, ApiError> {
    require_id(assignment_id, "la asignación")?;
    post(&endpoints::assignment_return(assignment_id), input).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn list_asset_maintenance(asset_id: &str) -> Result<Vec<Maintenance>, ApiError> {
    require_id(asset_id, "el activo")?;
    get(&endpoints::asset_maintenance(asset_id)).await
}

/// # Errors
///
/// Returns the transport or server error.
pub async fn create_maintenance(input: &MaintenanceInput) -> Result<Maintenance, ApiError> {
    post(endpoints::MAINTENANCE, input).await
}
