use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults_port() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("BACKEND_URL", "https://project.example.co/"),
        ("BACKEND_ANON_KEY", "anon"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.backend.url, "https://project.example.co");
    assert_eq!(cfg.backend.anon_key, "anon");
}

#[test]
fn from_lookup_parses_port() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BACKEND_URL", "http://localhost:54321"),
        ("BACKEND_ANON_KEY", "anon"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup(&[
        ("PORT", "http"),
        ("BACKEND_URL", "http://localhost:54321"),
        ("BACKEND_ANON_KEY", "anon"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", .. }));
}

#[test]
fn from_lookup_requires_backend_url() {
    let err = ServerConfig::from_lookup(lookup(&[("BACKEND_ANON_KEY", "anon")])).unwrap_err();
    assert!(matches!(err, ConfigError::Missing("BACKEND_URL")));
}

#[test]
fn from_lookup_treats_blank_key_as_missing() {
    let err = ServerConfig::from_lookup(lookup(&[
        ("BACKEND_URL", "http://localhost:54321"),
        ("BACKEND_ANON_KEY", "   "),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Missing("BACKEND_ANON_KEY")));
}

#[test]
fn from_lookup_rejects_invalid_backend_url() {
    let err = ServerConfig::from_lookup(lookup(&[
        ("BACKEND_URL", "not a url"),
        ("BACKEND_ANON_KEY", "anon"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ConfigError::Backend(BackendError::InvalidConfig(_))));
}
