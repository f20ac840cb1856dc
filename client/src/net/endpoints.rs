//! REST path builders, relative to the configured API base.

#[cfg(test)]
#[path = "endpoints_test.rs"]
mod endpoints_test;

use crate::config;

/// Join the API base with a resource path.
#[must_use]
pub fn url(path: &str) -> String {
    join(config::api_base(), path)
}

pub(crate) fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

pub const LOGIN: &str = "/auth/login";
pub const LOGOUT: &str = "/auth/logout";
pub const COMPANIES: &str = "/companies";
pub const SITES: &str = "/sites";
pub const AREAS: &str = "/areas";
pub const CATEGORIES: &str = "/categories";
pub const EMPLOYEES: &str = "/employees";
pub const ASSETS: &str = "/assets";
pub const ASSIGNMENTS: &str = "/assignments";
pub const MAINTENANCE: &str = "/maintenance";

#[must_use]
pub fn company(id: &str) -> String {
    format!("{COMPANIES}/{id}")
}

#[must_use]
pub fn company_sites(company_id: &str) -> String {
    format!("{COMPANIES}/{company_id}/sites")
}

#[must_use]
pub fn company_categories(company_id: &str) -> String {
    format!("{COMPANIES}/{company_id}/categories")
}

#[must_use]
pub fn company_employees(company_id: &str) -> String {
    format!("{COMPANIES}/{company_id}/employees")
}

#[must_use]
pub fn company_assets(company_id: &str) -> String {
    format!("{COMPANIES}/{company_id}/assets")
}

#[must_use]
pub fn site(id: &str) -> String {
    format!("{SITES}/{id}")
}

#[must_use]
pub fn site_areas(site_id: &str) -> String {
    format!("{SITES}/{site_id}/areas")
}

#[must_use]
pub fn employee(id: &str) -> String {
    format!("{EMPLOYEES}/{id}")
}

#[must_use]
pub fn employee_assignments(employee_id: &str) -> String {
    format!("{EMPLOYEES}/{employee_id}/assignments")
}

#[must_use]
pub fn asset(id: &str) -> String {
    format!("{ASSETS}/{id}")
}

#[must_use]
pub fn asset_qr(asset_id: &str) -> String {
    format!("{ASSETS}/{asset_id}/qr")
}

#[must_use]
pub fn asset_assignments(asset_id: &str) -> String {
    format!("{ASSETS}/{asset_id}/assignments")
}

#[must_use]
pub fn asset_maintenance(asset_id: &str) -> String {
    format!("{ASSETS}/{asset_id}/maintenance")
}

#[must_use]
pub fn assignment_return(assignment_id: &str) -> String {
    format!("{ASSIGNMENTS}/{assignment_id}/return")
}
