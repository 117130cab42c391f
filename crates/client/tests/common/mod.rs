//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use secrecy::SecretString;
use serde_json::{Value, json};

// Re-export commonly used types for test convenience
#[allow(unused_imports)]
pub use netsift_client::endpoints;
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Client with bearer auth pointed at the mock server, without retry backoff.
#[allow(dead_code)]
pub fn token_client(server: &MockServer) -> netsift_client::SplunkClient {
    netsift_client::SplunkClient::builder()
        .base_url(server.uri())
        .auth_strategy(netsift_client::AuthStrategy::ApiToken {
            token: SecretString::new("test-token".to_string().into()),
        })
        .max_retries(0)
        .build()
        .expect("client builds")
}

/// Client with username/password auth pointed at the mock server.
#[allow(dead_code)]
pub fn session_client(server: &MockServer) -> netsift_client::SplunkClient {
    netsift_client::SplunkClient::builder()
        .base_url(server.uri())
        .auth_strategy(netsift_client::AuthStrategy::SessionToken {
            username: "admin".to_string(),
            password: SecretString::new("changeme".to_string().into()),
        })
        .max_retries(0)
        .build()
        .expect("client builds")
}

/// Job status body as returned by `GET /services/search/jobs/{sid}`.
#[allow(dead_code)]
pub fn job_status_body(done: bool, progress: f64, results: u64) -> Value {
    json!({
        "entry": [{
            "name": "search index=main",
            "content": {
                "sid": "1700000000.42",
                "isDone": done,
                "doneProgress": progress,
                "scanCount": "1500",
                "eventCount": 120,
                "resultCount": results,
                "dispatchState": if done { "DONE" } else { "RUNNING" }
            }
        }]
    })
}
