//! Authentication types for netsift configuration.
//!
//! Invariants:
//! - Secret values use `secrecy::SecretString` so they never show up in `Debug` output.

use secrecy::SecretString;

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Username and password authentication (creates a session key).
    SessionToken {
        username: String,
        password: SecretString,
    },
    /// API token (bearer token authentication).
    ApiToken { token: SecretString },
}

/// Authentication configuration.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    pub strategy: AuthStrategy,
}
