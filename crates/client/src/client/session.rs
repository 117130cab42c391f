//! Client-level session management helpers.
//!
//! # Invariants
//! - [`SplunkClient::authorization`] requires `&mut self` because it may trigger a login call
//! - API token authentication never triggers login

use crate::auth::AuthStrategy;
use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use secrecy::ExposeSecret;

impl SplunkClient {
    /// `Authorization` header value for the next request, logging in first if needed.
    pub(crate) async fn authorization(&mut self) -> Result<String> {
        if self.session_manager.needs_login() {
            self.login().await?;
        }

        self.session_manager.authorization_header().ok_or_else(|| {
            let username = match self.session_manager.strategy() {
                AuthStrategy::SessionToken { username, .. } => username.clone(),
                AuthStrategy::ApiToken { .. } => "api-token".to_string(),
            };
            ClientError::SessionExpired { username }
        })
    }

    /// Check if the client is using API token authentication.
    pub fn is_api_token_auth(&self) -> bool {
        self.session_manager.is_api_token()
    }

    /// Login with username/password and store the session key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AuthFailed`] for API token auth or rejected credentials.
    pub async fn login(&mut self) -> Result<()> {
        let AuthStrategy::SessionToken { username, password } = self.session_manager.strategy()
        else {
            return Err(ClientError::AuthFailed(
                "Cannot login with API token auth strategy".to_string(),
            ));
        };

        let key = endpoints::login(
            &self.http,
            &self.base_url,
            username,
            password.expose_secret(),
            self.max_retries,
        )
        .await?;

        self.session_manager.set_session_key(key);
        Ok(())
    }
}
