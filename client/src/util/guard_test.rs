use super::*;
use crate::state::session::SessionUser;

fn session_with_role(role: &str) -> SessionSnapshot {
    SessionSnapshot {
        token: Some("token".to_owned()),
        user: Some(SessionUser {
            id: "u1".to_owned(),
            full_name: "Ana".to_owned(),
            email: "ana@example.com".to_owned(),
            role: role.to_owned(),
            company_id: Some("c1".to_owned()),
        }),
    }
}

#[test]
fn missing_token_redirects_to_login_with_return_url() {
    let decision = decide(&SessionSnapshot::default(), None, "/assets?status=lost&q=port");
    assert_eq!(
        decision,
        GuardDecision::RedirectLogin("/login?returnUrl=%2Fassets%3Fstatus%3Dlost%26q%3Dport".to_owned())
    );
}

#[test]
fn return_url_round_trips_through_query_parsing() {
    let original = "/assets/7?tab=history";
    let GuardDecision::RedirectLogin(to) = decide(&SessionSnapshot::default(), Some(&["admin"]), original) else {
        panic!("expected login redirect");
    };
    let query = to.split_once('?').map(|(_, q)| q).unwrap_or_default();
    let parsed: Vec<(String, String)> = form_urlencoded::parse(query.as_bytes()).into_owned().collect();
    assert_eq!(parsed, vec![(RETURN_URL_PARAM.to_owned(), original.to_owned())]);
}

#[test]
fn token_without_allow_list_is_allowed() {
    let session = SessionSnapshot { token: Some("t".to_owned()), user: None };
    assert_eq!(decide(&session, None, "/"), GuardDecision::Allow);
}

#[test]
fn matching_role_is_allowed() {
    assert_eq!(decide(&session_with_role("admin"), Some(&["admin"]), "/companies"), GuardDecision::Allow);
}

#[test]
fn role_outside_allow_list_redirects_to_default() {
    assert_eq!(
        decide(&session_with_role("technician"), Some(&["admin", "manager"]), "/companies"),
        GuardDecision::RedirectDefault("/".to_owned())
    );
}

#[test]
fn unreadable_user_with_allow_list_redirects_to_default() {
    let session = SessionSnapshot { token: Some("t".to_owned()), user: None };
    assert_eq!(decide(&session, Some(&["admin"]), "/companies"), GuardDecision::RedirectDefault("/".to_owned()));
}

#[test]
fn path_and_query_handles_leading_question_mark() {
    assert_eq!(path_and_query("/assets", "?status=lost"), "/assets?status=lost");
    assert_eq!(path_and_query("/assets", "status=lost"), "/assets?status=lost");
    assert_eq!(path_and_query("/assets", ""), "/assets");
    assert_eq!(path_and_query("/assets", "?"), "/assets");
}

#[test]
fn safe_return_url_accepts_relative_paths() {
    assert_eq!(safe_return_url(Some("/assets/3")), "/assets/3");
    assert_eq!(safe_return_url(Some("/assets?status=lost")), "/assets?status=lost");
}

#[test]
fn safe_return_url_rejects_external_and_loops() {
    assert_eq!(safe_return_url(None), "/");
    assert_eq!(safe_return_url(Some("https://evil.example.com")), "/");
    assert_eq!(safe_return_url(Some("//evil.example.com")), "/");
    assert_eq!(safe_return_url(Some("/\\evil.example.com")), "/");
    assert_eq!(safe_return_url(Some("/login?returnUrl=%2F")), "/");
}
