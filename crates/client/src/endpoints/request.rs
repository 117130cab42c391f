//! Retry helper for HTTP requests with exponential backoff.
//!
//! Responsibilities:
//! - Retry requests answered with 429, 502, 503 or 504.
//! - Turn every other non-success answer into [`ClientError::ApiError`] with
//!   Splunk's `messages` flattened into one line.
//!
//! Invariants:
//! - Backoff before retry `n` (0-based) is `2^n` seconds.
//! - Transport errors are not retried.

use reqwest::{RequestBuilder, Response};
use std::time::Duration;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::models::SplunkMessages;

/// Sends an HTTP request, retrying transient server answers up to `max_retries` times.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when all retry attempts are exhausted.
/// Returns `ClientError::ApiError` for other non-success statuses.
/// Propagates transport errors as `ClientError::HttpError`.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                debug!("Request builder cannot be cloned, single attempt only");
                return check_status(builder.send().await?).await;
            }
        };

        let response = attempt_builder.send().await?;
        let status = response.status().as_u16();

        if !ClientError::is_retryable_status(status) {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return check_status(response).await;
        }

        if attempt < max_retries {
            let backoff_secs = 2u64.pow(attempt as u32);
            debug!(
                status,
                attempt = attempt + 1,
                max_attempts = max_retries + 1,
                backoff_secs,
                "Transient error, retrying with exponential backoff"
            );
            tokio::time::sleep(Duration::from_secs(backoff_secs)).await;
        } else if max_retries == 0 {
            return check_status(response).await;
        }
    }

    debug!(attempts = max_retries + 1, "Max retries exhausted");
    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

async fn check_status(response: Response) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status().as_u16();
    let url = response.url().to_string();
    let request_id = response
        .headers()
        .get("X-Splunk-Request-Id")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = match serde_json::from_str::<SplunkMessages>(&body) {
        Ok(m) if !m.messages.is_empty() => m.joined(),
        _ => body,
    };

    Err(ClientError::ApiError {
        status,
        url,
        message,
        request_id,
    })
}
