use super::*;

#[test]
fn area_input_needs_site() {
    assert_eq!(area_input(None, "Bodega"), Err("No se indicó la sede del área.".to_owned()));
}

#[test]
fn area_input_trims_name() {
    assert_eq!(
        area_input(Some("s1"), "  Bodega "),
        Ok(AreaInput { site_id: "s1".to_owned(), name: "Bodega".to_owned() })
    );
}
