use super::*;

#[test]
fn company_input_trims_and_drops_blank_optionals() {
    let draft = CompanyDraft {
        name: "  ACME S.A.S. ".to_owned(),
        tax_id: "900.123.456-7".to_owned(),
        email: "   ".to_owned(),
        ..CompanyDraft::default()
    };
    let input = company_input(&draft).expect("valid");
    assert_eq!(input.name, "ACME S.A.S.");
    assert_eq!(input.tax_id.as_deref(), Some("900.123.456-7"));
    assert_eq!(input.email, None);
    assert_eq!(input.address, None);
}

#[test]
fn company_input_requires_name() {
    let err = company_input(&CompanyDraft::default()).expect_err("blank name");
    assert!(err.contains("Nombre"));
}

#[test]
fn draft_round_trips_existing_company() {
    let company = Company {
        id: "c1".to_owned(),
        name: "ACME".to_owned(),
        tax_id: None,
        email: Some("info@acme.co".to_owned()),
        phone: None,
        address: Some("Cra 7 # 10-20".to_owned()),
    };
    let draft = CompanyDraft::from_company(&company);
    assert_eq!(draft.tax_id, "");
    let input = company_input(&draft).expect("valid");
    assert_eq!(input.email.as_deref(), Some("info@acme.co"));
    assert_eq!(input.address.as_deref(), Some("Cra 7 # 10-20"));
}
