use super::*;

#[test]
fn validate_login_trims_email() {
    assert_eq!(
        validate_login("  ana@example.com ", "secreto"),
        Ok(LoginRequest { email: "ana@example.com".to_owned(), password: "secreto".to_owned() })
    );
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login("", "x"), Err("Ingrese su correo y contraseña."));
    assert_eq!(validate_login("ana@example.com", ""), Err("Ingrese su correo y contraseña."));
}

#[test]
fn validate_login_keeps_password_whitespace() {
    let request = validate_login("ana@example.com", " pass ").expect("valid");
    assert_eq!(request.password, " pass ");
}

#[test]
fn validate_login_rejects_malformed_email() {
    assert_eq!(validate_login("ana", "x"), Err("Ingrese un correo válido."));
    assert_eq!(validate_login("@example.com", "x"), Err("Ingrese un correo válido."));
    assert_eq!(validate_login("ana@localhost", "x"), Err("Ingrese un correo válido."));
    assert_eq!(validate_login("ana@.com", "x"), Err("Ingrese un correo válido."));
}
