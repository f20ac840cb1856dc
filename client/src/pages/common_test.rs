use super::*;
use crate::state::session::{SessionSnapshot, SessionUser};

fn employee(id: &str, name: &str) -> Employee {
    Employee {
        id: id.to_owned(),
        company_id: "c1".to_owned(),
        area_id: None,
        name: name.to_owned(),
        role: None,
        email: None,
        phone: None,
    }
}

#[test]
fn company_of_requires_company_in_session() {
    let user = SessionUser {
        id: "u1".to_owned(),
        full_name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        role: "admin".to_owned(),
        company_id: None,
    };
    let mut auth = AuthState::loaded(SessionSnapshot { token: Some("t".to_owned()), user: Some(user) });
    assert!(matches!(company_of(&auth), Err(ApiError::Invalid(_))));

    if let Some(user) = auth.session.user.as_mut() {
        user.company_id = Some("c9".to_owned());
    }
    assert_eq!(company_of(&auth), Ok("c9".to_owned()));
}

#[test]
fn employee_name_lookup() {
    let employees = vec![employee("e1", "Ana"), employee("e2", "Luis")];
    assert_eq!(employee_name(&employees, Some("e2")), "Luis");
    assert_eq!(employee_name(&employees, Some("e9")), "N/A");
    assert_eq!(employee_name(&employees, None), "N/A");
}

#[test]
fn employee_options_pairs_id_and_name() {
    let employees = vec![employee("e1", "Ana")];
    assert_eq!(employee_options(&employees), vec![("e1".to_owned(), "Ana".to_owned())]);
}

#[test]
fn asset_label_falls_back_to_id() {
    let assets = vec![Asset {
        id: "a1".to_owned(),
        company_id: "c1".to_owned(),
        code: "LAP-01".to_owned(),
        name: "Portátil".to_owned(),
        status: crate::net::types::AssetStatus::Active,
        purchase_value: None,
        current_value: None,
        purchase_date: None,
        category_id: None,
        site_id: None,
        area_id: None,
        owner_id: None,
        description: None,
    }];
    assert_eq!(asset_label(&assets, "a1"), "LAP-01 · Portátil");
    assert_eq!(asset_label(&assets, "a2"), "#a2");
}

#[test]
fn or_missing_treats_blank_as_absent() {
    assert_eq!(or_missing(Some("Calle 1")), "Calle 1");
    assert_eq!(or_missing(Some("  ")), "N/A");
    assert_eq!(or_missing(None), "N/A");
}
