use super::*;

#[test]
fn join_normalizes_slashes() {
    assert_eq!(join("/api/", "/assets"), "/api/assets");
    assert_eq!(join("https://activos.example.com/api", "assets/1"), "https://activos.example.com/api/assets/1");
}

#[test]
fn url_uses_default_base() {
    assert_eq!(url(ASSETS), format!("{}/assets", config::api_base().trim_end_matches('/')));
}

#[test]
fn parent_scoped_paths() {
    assert_eq!(company_sites("c1"), "/companies/c1/sites");
    assert_eq!(company_categories("c1"), "/companies/c1/categories");
    assert_eq!(company_employees("c1"), "/companies/c1/employees");
    assert_eq!(company_assets("c1"), "/companies/c1/assets");
    assert_eq!(site_areas("s9"), "/sites/s9/areas");
}

#[test]
fn history_paths() {
    assert_eq!(asset_assignments("a1"), "/assets/a1/assignments");
    assert_eq!(asset_maintenance("a1"), "/assets/a1/maintenance");
    assert_eq!(employee_assignments("e4"), "/employees/e4/assignments");
    assert_eq!(assignment_return("as7"), "/assignments/as7/return");
}

#[test]
fn detail_paths() {
    assert_eq!(company("c1"), "/companies/c1");
    assert_eq!(site("s1"), "/sites/s1");
    assert_eq!(employee("e1"), "/employees/e1");
    assert_eq!(asset("a1"), "/assets/a1");
    assert_eq!(asset_qr("a1"), "/assets/a1/qr");
}
