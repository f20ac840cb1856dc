use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        ServerConfig { port: DEFAULT_PORT, backend_url: None, backend_timeout_secs: DEFAULT_BACKEND_TIMEOUT_SECS }
    );
}

#[test]
fn parses_overrides_and_trims_backend_slash() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "https://api.example.test/v1/"),
        ("BACKEND_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.backend_url.as_deref(), Some("https://api.example.test/v1"));
    assert_eq!(cfg.backend_timeout_secs, 5);
}

#[test]
fn rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".into() });
}

#[test]
fn rejects_non_http_backend() {
    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_URL", "ftp://files")])).unwrap_err();
    assert!(matches!(err, ConfigError::BackendUrl(_)));
}

#[test]
fn blank_values_fall_back() {
    let cfg = ServerConfig::from_lookup(lookup(&[("PORT", " "), ("BACKEND_URL", ""), ("BACKEND_TIMEOUT_SECS", "0")]))
        .unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend_url, None);
    assert_eq!(cfg.backend_timeout_secs, DEFAULT_BACKEND_TIMEOUT_SECS);
}

