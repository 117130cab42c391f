//! Builder tests that do not read the process environment.

use crate::constants::{
    DEFAULT_DHCP_INDEX, DEFAULT_FIREWALL_INDEX, DEFAULT_MAX_RETRIES, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_POLL_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS, DEFAULT_WINDOWS_INDEX,
};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use secrecy::ExposeSecret;
use std::time::Duration;

#[test]
fn test_build_with_api_token_uses_defaults() {
    let config = ConfigLoader::new()
        .with_base_url("https://splunk.example.com:8089".to_string())
        .with_api_token("test-token".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "https://splunk.example.com:8089");
    assert!(!config.connection.skip_verify);
    assert_eq!(
        config.connection.timeout,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS)
    );
    assert_eq!(config.connection.max_retries, DEFAULT_MAX_RETRIES);
    assert_eq!(
        config.poll.interval,
        Duration::from_millis(DEFAULT_POLL_INTERVAL_MS)
    );
    assert_eq!(
        config.poll.timeout,
        Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS)
    );
    assert_eq!(config.indexes.firewall, DEFAULT_FIREWALL_INDEX);
    assert_eq!(config.indexes.dhcp, DEFAULT_DHCP_INDEX);
    assert_eq!(config.indexes.windows, DEFAULT_WINDOWS_INDEX);

    match config.auth.strategy {
        AuthStrategy::ApiToken { token } => assert_eq!(token.expose_secret(), "test-token"),
        other => panic!("expected API token auth, got {:?}", other),
    }
}

#[test]
fn test_api_token_takes_precedence_over_session() {
    let config = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_username("admin".to_string())
        .with_password("secret".to_string())
        .with_api_token("token".to_string())
        .build()
        .unwrap();

    assert!(matches!(
        config.auth.strategy,
        AuthStrategy::ApiToken { .. }
    ));
}

#[test]
fn test_session_auth_requires_both_username_and_password() {
    let result = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_username("admin".to_string())
        .build();

    assert!(matches!(result, Err(ConfigError::MissingAuth)));
}

#[test]
fn test_base_url_built_from_host_port_scheme() {
    let config = ConfigLoader::new()
        .with_host("splunk.corp.local".to_string())
        .with_port(8090)
        .with_scheme("HTTP".to_string())
        .with_api_token("token".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "http://splunk.corp.local:8090");
}

#[test]
fn test_host_defaults_to_https_and_management_port() {
    let config = ConfigLoader::new()
        .with_host("splunk.corp.local".to_string())
        .with_api_token("token".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "https://splunk.corp.local:8089");
}

#[test]
fn test_base_url_wins_over_host() {
    let config = ConfigLoader::new()
        .with_base_url("https://primary:8089/".to_string())
        .with_host("ignored".to_string())
        .with_api_token("token".to_string())
        .build()
        .unwrap();

    assert_eq!(config.connection.base_url, "https://primary:8089");
}

#[test]
fn test_missing_host_and_base_url_is_error() {
    let result = ConfigLoader::new()
        .with_api_token("token".to_string())
        .build();

    assert!(matches!(result, Err(ConfigError::MissingBaseUrl)));
}

#[test]
fn test_unknown_scheme_rejected() {
    let result = ConfigLoader::new()
        .with_host("splunk".to_string())
        .with_scheme("ftp".to_string())
        .with_api_token("token".to_string())
        .build();

    match result {
        Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "SPLUNK_SCHEME"),
        other => panic!("expected InvalidValue for scheme, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_base_url_without_scheme_rejected() {
    let result = ConfigLoader::new()
        .with_base_url("localhost:8089".to_string())
        .with_api_token("token".to_string())
        .build();

    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_password_is_not_exposed_in_debug_output() {
    let config = ConfigLoader::new()
        .with_base_url("https://localhost:8089".to_string())
        .with_username("admin".to_string())
        .with_password("hunter2-very-secret".to_string())
        .build()
        .unwrap();

    let debug = format!("{:?}", config);
    assert!(!debug.contains("hunter2-very-secret"));
}
