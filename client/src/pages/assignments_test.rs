use super::*;

fn asset(id: &str, status: AssetStatus) -> Asset {
    Asset {
        id: id.to_owned(),
        company_id: "c1".to_owned(),
        code: format!("A-{id}"),
        name: "Equipo".to_owned(),
        status,
        purchase_value: None,
        current_value: None,
        purchase_date: None,
        category_id: None,
        site_id: None,
        area_id: None,
        owner_id: None,
        description: None,
    }
}

#[test]
fn assignable_assets_keeps_active_and_preselected() {
    let assets = vec![
        asset("1", AssetStatus::Active),
        asset("2", AssetStatus::Retired),
        asset("3", AssetStatus::UnderMaintenance),
    ];
    let options = assignable_assets(&assets, None);
    assert_eq!(options, vec![("1".to_owned(), "A-1 · Equipo".to_owned())]);

    let ids: Vec<String> = assignable_assets(&assets, Some("3")).into_iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["1".to_owned(), "3".to_owned()]);
}

#[test]
fn assignment_input_records_issuer() {
    let input = assignment_input("a1", "e1", "2024-06-01", "  ", Some("u1".to_owned())).expect("valid");
    assert_eq!(input.asset_id, "a1");
    assert_eq!(input.employee_id, "e1");
    assert_eq!(input.issued_by_id.as_deref(), Some("u1"));
    assert_eq!(input.issue_date, "2024-06-01");
    assert_eq!(input.notes, None);
}

#[test]
fn assignment_input_requires_asset_employee_and_date() {
    assert!(assignment_input("", "e1", "2024-06-01", "", None).is_err());
    assert!(assignment_input("a1", "", "2024-06-01", "", None).is_err());
    assert!(assignment_input("a1", "e1", "", "", None).is_err());
    assert!(assignment_input("a1", "e1", "ayer", "", None).is_err());
}
