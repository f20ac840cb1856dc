use super::*;

#[test]
fn asset_accepts_numeric_ids_and_decimal_strings() {
    let raw = serde_json::json!({
        "id": 42,
        "companyId": 7,
        "code": "LAP-001",
        "name": "Portátil",
        "status": "under-maintenance",
        "purchaseValue": "2500000.00",
        "currentValue": 1800000,
        "categoryId": null
    });
    let asset: Asset = serde_json::from_value(raw).expect("asset");
    assert_eq!(asset.id, "42");
    assert_eq!(asset.company_id, "7");
    assert_eq!(asset.status, AssetStatus::UnderMaintenance);
    assert_eq!(asset.purchase_value, Some(2_500_000.0));
    assert_eq!(asset.current_value, Some(1_800_000.0));
    assert_eq!(asset.category_id, None);
    assert_eq!(asset.owner_id, None);
}

#[test]
fn asset_status_accepts_snake_case_alias() {
    let status: AssetStatus = serde_json::from_str("\"under_maintenance\"").expect("status");
    assert_eq!(status, AssetStatus::UnderMaintenance);
    assert_eq!(serde_json::to_string(&status).expect("json"), "\"under-maintenance\"");
}

#[test]
fn asset_status_parse_matches_wire_values() {
    for status in AssetStatus::ALL {
        assert_eq!(AssetStatus::parse(status.as_str()), Some(status));
    }
    assert_eq!(AssetStatus::parse("broken"), None);
}

#[test]
fn asset_rejects_unparseable_money_string() {
    let raw = serde_json::json!({
        "id": "a1",
        "companyId": "c1",
        "code": "X",
        "name": "X",
        "purchaseValue": "mucho"
    });
    assert!(serde_json::from_value::<Asset>(raw).is_err());
}

#[test]
fn empty_money_string_is_none() {
    let raw = serde_json::json!({
        "id": "a1",
        "companyId": "c1",
        "code": "X",
        "name": "X",
        "currentValue": "  "
    });
    let asset: Asset = serde_json::from_value(raw).expect("asset");
    assert_eq!(asset.current_value, None);
    assert_eq!(asset.status, AssetStatus::Active);
}

#[test]
fn empty_required_id_is_rejected() {
    let raw = serde_json::json!({ "id": "", "siteId": "s1", "name": "Bodega" });
    assert!(serde_json::from_value::<Area>(raw).is_err());
}

#[test]
fn assignment_without_return_date_is_active() {
    let raw = serde_json::json!({
        "id": 1,
        "assetId": 2,
        "employeeId": 3,
        "issueDate": "2024-03-01"
    });
    let assignment: Assignment = serde_json::from_value(raw).expect("assignment");
    assert!(assignment.is_active());

    let returned = Assignment { return_date: Some("2024-04-01".to_owned()), ..assignment.clone() };
    assert!(!returned.is_active());

    let blank = Assignment { return_date: Some(String::new()), ..assignment };
    assert!(blank.is_active());
}

#[test]
fn maintenance_type_uses_type_key() {
    let raw = serde_json::json!({
        "id": "m1",
        "assetId": "a1",
        "technicianId": 9,
        "type": "corrective",
        "date": "2024-05-10",
        "cost": 150000.5
    });
    let record: Maintenance = serde_json::from_value(raw).expect("maintenance");
    assert_eq!(record.kind, MaintenanceType::Corrective);
    assert_eq!(record.technician_id.as_deref(), Some("9"));
    assert_eq!(record.cost, Some(150_000.5));
}

#[test]
fn maintenance_input_serializes_type_and_skips_empty_optionals() {
    let input = MaintenanceInput {
        asset_id: "a1".to_owned(),
        kind: MaintenanceType::Preventive,
        date: "2024-05-10".to_owned(),
        ..MaintenanceInput::default()
    };
    assert_eq!(
        serde_json::to_value(&input).expect("json"),
        serde_json::json!({ "assetId": "a1", "type": "preventive", "date": "2024-05-10" })
    );
}

#[test]
fn envelope_unwraps_data_key_or_bare_payload() {
    let wrapped: Envelope<Vec<Site>> = serde_json::from_value(serde_json::json!({
        "data": [{ "id": 1, "companyId": 2, "name": "Sede norte" }]
    }))
    .expect("wrapped");
    assert_eq!(wrapped.into_inner().len(), 1);

    let bare: Envelope<Vec<Site>> =
        serde_json::from_value(serde_json::json!([{ "id": 1, "companyId": 2, "name": "Sede norte" }]))
            .expect("bare");
    assert_eq!(bare.into_inner()[0].name, "Sede norte");
}

#[test]
fn company_input_omits_missing_contact_fields() {
    let input = CompanyInput { name: "ACME".to_owned(), tax_id: Some("900123".to_owned()), ..CompanyInput::default() };
    assert_eq!(
        serde_json::to_value(&input).expect("json"),
        serde_json::json!({ "name": "ACME", "taxId": "900123" })
    );
}
