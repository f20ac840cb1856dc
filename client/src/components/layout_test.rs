use super::*;

#[test]
fn admin_sees_companies() {
    let labels: Vec<_> = visible_nav_items(Some("admin")).iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["Inicio", "Empresas", "Activos", "Empleados"]);
}

#[test]
fn other_roles_do_not_see_companies() {
    let labels: Vec<_> = visible_nav_items(Some("technician")).iter().map(|i| i.label).collect();
    assert_eq!(labels, vec!["Inicio", "Activos", "Empleados"]);
    assert_eq!(visible_nav_items(None).len(), 3);
}

#[test]
fn active_link_matching() {
    assert!(is_active("/", "/"));
    assert!(!is_active("/", "/assets"));
    assert!(is_active("/assets", "/assets"));
    assert!(is_active("/assets", "/assets/12"));
    assert!(!is_active("/assets", "/assets-archive"));
}
