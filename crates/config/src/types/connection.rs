//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (URL, TLS verification, timeouts, retries).
//! - Define the top-level `Config` combining connection, auth, polling and indexes.
//!
//! Invariants:
//! - `base_url` is an absolute http(s) URL without a trailing slash.

use std::time::Duration;

use crate::types::auth::AuthConfig;
use crate::types::search::{PollConfig, SearchIndexes};

/// Connection configuration for the Splunk management endpoint.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Splunk server (e.g., https://splunk.example.com:8089)
    pub base_url: String,
    /// Whether to skip TLS verification (for self-signed certificates)
    pub skip_verify: bool,
    /// HTTP request timeout
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited or unavailable responses
    pub max_retries: usize,
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
    pub poll: PollConfig,
    pub indexes: SearchIndexes,
}
