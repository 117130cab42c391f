//! Authentication strategies and session management.
//!
//! Invariants:
//! - API tokens are sent as `Authorization: Bearer <token>`.
//! - Session keys from `/services/auth/login` are sent as `Authorization: Splunk <key>`.
//! - Neither secret ever appears in `Debug` output.

use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with Splunk.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// Username and password authentication.
    /// The client logs in once and reuses the session key.
    SessionToken {
        username: String,
        password: SecretString,
    },
    /// API token (bearer token authentication).
    ApiToken { token: SecretString },
}

/// Holds the auth strategy and, for session auth, the current session key.
#[derive(Debug)]
pub struct SessionManager {
    auth_strategy: AuthStrategy,
    session_key: Option<SecretString>,
}

impl SessionManager {
    /// Create a new session manager with the given auth strategy.
    pub fn new(strategy: AuthStrategy) -> Self {
        Self {
            auth_strategy: strategy,
            session_key: None,
        }
    }

    /// Get the current auth strategy.
    pub fn strategy(&self) -> &AuthStrategy {
        &self.auth_strategy
    }

    /// Check if we're using API token auth (no login needed).
    pub fn is_api_token(&self) -> bool {
        matches!(self.auth_strategy, AuthStrategy::ApiToken { .. })
    }

    /// Whether a login is required before the next request.
    pub fn needs_login(&self) -> bool {
        !self.is_api_token() && self.session_key.is_none()
    }

    /// Store the session key returned by a successful login.
    pub fn set_session_key(&mut self, key: String) {
        self.session_key = Some(SecretString::new(key.into()));
    }

    /// Forget the session key so the next request logs in again.
    pub fn clear_session(&mut self) {
        self.session_key = None;
    }

    /// Build the `Authorization` header value for the current credentials.
    ///
    /// Returns `None` for session auth before a login has happened.
    pub fn authorization_header(&self) -> Option<String> {
        match &self.auth_strategy {
            AuthStrategy::ApiToken { token } => Some(format!("Bearer {}", token.expose_secret())),
            AuthStrategy::SessionToken { .. } => self
                .session_key
                .as_ref()
                .map(|key| format!("Splunk {}", key.expose_secret())),
        }
    }
}
