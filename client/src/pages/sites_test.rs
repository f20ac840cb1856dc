use super::*;

#[test]
fn site_input_requires_company_and_name() {
    assert!(site_input(None, "Sede norte", "").is_err());
    assert!(site_input(Some("  "), "Sede norte", "").is_err());
    assert!(site_input(Some("c1"), " ", "").is_err());
}

#[test]
fn site_input_trims_fields() {
    let input = site_input(Some("c1"), " Sede norte ", " Calle 100 ").expect("valid");
    assert_eq!(
        input,
        SiteInput { company_id: "c1".to_owned(), name: "Sede norte".to_owned(), address: Some("Calle 100".to_owned()) }
    );
}
