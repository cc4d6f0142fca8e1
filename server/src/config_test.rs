use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_only_database_url_set() {
    let config = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://localhost/app")])).unwrap();
    assert_eq!(config.database_url, "postgres://localhost/app");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS);
}

#[test]
fn missing_database_url_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
    assert_eq!(err.to_string(), "DATABASE_URL is required");
}

#[test]
fn blank_database_url_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap_err();
    assert_eq!(err, ConfigError::Missing("DATABASE_URL"));
}

#[test]
fn port_is_parsed() {
    let config =
        ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("PORT", " 8080 ")])).unwrap();
    assert_eq!(config.port, 8080);
}

#[test]
fn invalid_port_is_an_error() {
    let err = ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() });
}

#[test]
fn db_max_connections_is_parsed() {
    let config =
        ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("DB_MAX_CONNECTIONS", "12")]))
            .unwrap();
    assert_eq!(config.db_max_connections, 12);
}

#[test]
fn db_max_connections_falls_back_on_garbage_or_zero() {
    for raw in ["lots", "0", "-3"] {
        let config =
            ServerConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x"), ("DB_MAX_CONNECTIONS", raw)]))
                .unwrap();
        assert_eq!(config.db_max_connections, DEFAULT_DB_MAX_CONNECTIONS, "raw = {raw:?}");
    }
}
