//! Error types for the Splunk client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Splunk client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Splunk.
    #[error("API error ({status}) at {url}: {message}{}", .request_id.as_ref().map(|id| format!(" [Request ID: {id}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        request_id: Option<String>,
    },

    /// Session expired and could not be renewed.
    #[error("Session expired for user '{username}', please re-authenticate")]
    SessionExpired { username: String },

    /// Invalid response format from Splunk.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests (rate limiting)
    /// - 502: Bad Gateway (transient server error)
    /// - 503: Service Unavailable (transient server error)
    /// - 504: Gateway Timeout (transient server error)
    ///
    /// Non-retryable status codes (fail immediately):
    /// - 400, 401, 403, 404: Client errors
    /// - 500: Internal Server Error (typically indicates a bug, not transient)
    /// - 501: Not Implemented
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::AuthFailed(_) | Self::SessionExpired { .. } => true,
            Self::ApiError { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }

    /// Check if the server could not be reached at all.
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::InvalidUrl(_) => true,
            Self::HttpError(e) => e.is_connect() || e.is_timeout(),
            _ => false,
        }
    }

    /// Check if the server answered but is unable to serve requests right now.
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::MaxRetriesExceeded(_) => true,
            Self::ApiError { status, .. } => Self::is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if Splunk rejected the request itself (bad search syntax, unknown index).
    pub fn is_rejected_request(&self) -> bool {
        matches!(self, Self::ApiError { status: 400, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "https://localhost:8089/services/search/jobs".to_string(),
            message: "ERROR: failed".to_string(),
            request_id: None,
        }
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(ClientError::AuthFailed("test".to_string()).is_auth_error());
        assert!(
            ClientError::SessionExpired {
                username: "admin".to_string()
            }
            .is_auth_error()
        );
        assert!(api_error(401).is_auth_error());
        assert!(api_error(403).is_auth_error());
        assert!(!api_error(400).is_auth_error());
        assert!(!ClientError::MaxRetriesExceeded(4).is_auth_error());
    }

    #[test]
    fn test_is_retryable_status_retryable() {
        assert!(ClientError::is_retryable_status(429));
        assert!(ClientError::is_retryable_status(502));
        assert!(ClientError::is_retryable_status(503));
        assert!(ClientError::is_retryable_status(504));
    }

    #[test]
    fn test_is_retryable_status_not_retryable() {
        assert!(!ClientError::is_retryable_status(400));
        assert!(!ClientError::is_retryable_status(401));
        assert!(!ClientError::is_retryable_status(403));
        assert!(!ClientError::is_retryable_status(404));
        assert!(!ClientError::is_retryable_status(500));
        assert!(!ClientError::is_retryable_status(501));
        assert!(!ClientError::is_retryable_status(200));
    }

    #[test]
    fn test_unavailable_and_rejected_classification() {
        assert!(api_error(503).is_unavailable());
        assert!(ClientError::MaxRetriesExceeded(4).is_unavailable());
        assert!(api_error(429).is_unavailable());
        assert!(!api_error(500).is_unavailable());
        assert!(ClientError::InvalidUrl("x".to_string()).is_connection_error());
        assert!(!api_error(503).is_connection_error());
        assert!(api_error(400).is_rejected_request());
        assert!(!api_error(404).is_rejected_request());
    }

    #[test]
    fn test_api_error_display_includes_request_id() {
        let err = ClientError::ApiError {
            status: 400,
            url: "https://localhost:8089/services/search/jobs".to_string(),
            message: "FATAL: Unknown search command".to_string(),
            request_id: Some("abc123".to_string()),
        };
        let display = err.to_string();
        assert!(display.contains("400"));
        assert!(display.contains("Unknown search command"));
        assert!(display.contains("[Request ID: abc123]"));
    }
}
