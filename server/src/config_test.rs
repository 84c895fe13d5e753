use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn parses_overrides() {
    let cfg = AppConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("TIX_API_UPSTREAM", "https://api.tix.test/api/v1/"),
        ("LEPTOS_CONFIG", "Cargo.toml"),
    ]))
    .unwrap();
    assert_eq!(cfg.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.api_upstream.as_deref(), Some("https://api.tix.test/api/v1"));
    assert_eq!(cfg.leptos_config.as_deref(), Some("Cargo.toml"));
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = AppConfig::from_lookup(lookup(&[("PORT", "  "), ("TIX_API_UPSTREAM", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream, None);
}

#[test]
fn rejects_invalid_port() {
    let err = AppConfig::from_lookup(lookup(&[("PORT", "99999")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));
}

#[test]
fn rejects_invalid_bind_addr() {
    let err = AppConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { key: "BIND_ADDR", .. }));
}

#[test]
fn rejects_upstream_without_scheme() {
    let err = AppConfig::from_lookup(lookup(&[("TIX_API_UPSTREAM", "api.tix.test")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid TIX_API_UPSTREAM: \"api.tix.test\"");
}
