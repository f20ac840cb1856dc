use super::*;

fn employee(id: &str, name: &str, role: Option<&str>, email: Option<&str>) -> Employee {
    Employee {
        id: id.to_owned(),
        company_id: "c1".to_owned(),
        area_id: None,
        name: name.to_owned(),
        role: role.map(str::to_owned),
        email: email.map(str::to_owned),
        phone: None,
    }
}

#[test]
fn filter_employees_matches_name_role_and_email() {
    let employees = vec![
        employee("1", "Ana Gómez", Some("Contadora"), Some("ana@acme.co")),
        employee("2", "Luis Pérez", Some("Técnico"), None),
    ];
    assert_eq!(filter_employees(&employees, "ana").len(), 1);
    assert_eq!(filter_employees(&employees, "TÉCNICO")[0].id, "2");
    assert_eq!(filter_employees(&employees, "acme.co")[0].id, "1");
    assert!(filter_employees(&employees, "zzz").is_empty());
}

#[test]
fn blank_query_keeps_everyone() {
    let employees = vec![employee("1", "Ana", None, None), employee("2", "Luis", None, None)];
    assert_eq!(filter_employees(&employees, "   ").len(), 2);
}

#[test]
fn area_options_prefix_site_name() {
    let sites = vec![Site {
        id: "s1".to_owned(),
        company_id: "c1".to_owned(),
        name: "Norte".to_owned(),
        address: None,
    }];
    let areas = vec![
        Area { id: "a1".to_owned(), site_id: "s1".to_owned(), name: "Bodega".to_owned() },
        Area { id: "a2".to_owned(), site_id: "s9".to_owned(), name: "Recepción".to_owned() },
    ];
    assert_eq!(
        area_options(&sites, &areas),
        vec![("a1".to_owned(), "Norte · Bodega".to_owned()), ("a2".to_owned(), "Recepción".to_owned())]
    );
}

#[test]
fn employee_input_scopes_to_company() {
    let draft = EmployeeDraft { name: " Ana ".to_owned(), area_id: "a1".to_owned(), ..EmployeeDraft::default() };
    let input = employee_input("c1", &draft).expect("valid");
    assert_eq!(input.company_id, "c1");
    assert_eq!(input.name, "Ana");
    assert_eq!(input.area_id.as_deref(), Some("a1"));
    assert_eq!(input.role, None);
}

#[test]
fn employee_input_requires_name() {
    assert!(employee_input("c1", &EmployeeDraft::default()).is_err());
}

#[test]
fn draft_from_employee_fills_blanks() {
    let draft = EmployeeDraft::from_employee(&employee("1", "Ana", None, Some("ana@acme.co")));
    assert_eq!(draft.role, "");
    assert_eq!(draft.email, "ana@acme.co");
}
