//! Splunk REST API client.
//!
//! This module provides [`SplunkClient`], the HTTP implementation of
//! [`crate::backend::SearchBackend`]. It handles authentication and
//! session management.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login and `Authorization` header helpers (private module)
//! - `search`: `SearchBackend` implementation over the search job endpoints
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Job lifecycle and polling policy (see [`crate::job`])
//!
//! # Invariants
//! - A 401 on a session-authenticated call clears the session, logs in again
//!   and retries the call once. API tokens are never retried this way.

pub mod builder;
mod search;
mod session;

use crate::auth::SessionManager;

/// Wrap an endpoint call with one re-login on 401 for session auth.
///
/// The placeholder `$auth` is bound to the current `Authorization` header value.
macro_rules! retry_call {
    ($self:expr, $auth:ident, $call:expr) => {{
        let $auth = $self.authorization().await?;
        match $call {
            Err($crate::error::ClientError::ApiError { status: 401, .. })
                if !$self.is_api_token_auth() =>
            {
                ::tracing::debug!("Session rejected (status 401), logging in again");
                $self.session_manager.clear_session();
                let $auth = $self.authorization().await?;
                $call
            }
            result => result,
        }
    }};
}
pub(crate) use retry_call;

/// Splunk REST API client.
///
/// ```rust,ignore
/// use netsift_client::{AuthStrategy, SplunkClient};
/// use secrecy::SecretString;
///
/// let client = SplunkClient::builder()
///     .base_url("https://localhost:8089".to_string())
///     .auth_strategy(AuthStrategy::ApiToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .build()?;
/// ```
#[derive(Debug)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: SessionManager,
    pub(crate) max_retries: usize,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
