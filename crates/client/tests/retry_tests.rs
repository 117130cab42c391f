//! Retry and error-mapping tests for `send_request_with_retry`.
//!
//! # Invariants
//! - 429, 502, 503 and 504 are retried with exponential backoff
//! - Exhausting the budget yields `MaxRetriesExceeded`
//! - Other failures are not retried and carry Splunk's flattened messages

mod common;

use common::*;
use netsift_client::ClientError;
use serde_json::json;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_retry_on_429_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "messages": [{"type": "ERROR", "text": "Rate limited"}]
        })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"sid": "s1"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sid = endpoints::create_job(
        &Client::new(),
        &mock_server.uri(),
        "Bearer test-token",
        "search index=main",
        &endpoints::CreateJobOptions::default(),
        1,
    )
    .await
    .unwrap();

    assert_eq!(sid, "s1");
}

#[tokio::test]
async fn test_retry_exhaustion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/s1"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&mock_server)
        .await;

    let err = endpoints::get_job_status(&Client::new(), &mock_server.uri(), "Bearer t", "s1", 1)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::MaxRetriesExceeded(2)));
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn test_no_retry_budget_returns_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/services/search/jobs/s1"))
        .respond_with(ResponseTemplate::new(502))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = endpoints::get_job_status(&Client::new(), &mock_server.uri(), "Bearer t", "s1", 0)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::ApiError { status: 502, .. }));
    assert!(err.is_unavailable());
}

#[tokio::test]
async fn test_bad_request_is_not_retried_and_flattens_messages() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(
            ResponseTemplate::new(400)
                .insert_header("X-Splunk-Request-Id", "req-7")
                .set_body_json(json!({
                    "messages": [
                        {"type": "FATAL", "text": "Error in 'search' command"},
                        {"type": "WARN", "text": "Unknown field"}
                    ]
                })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = endpoints::create_job(
        &Client::new(),
        &mock_server.uri(),
        "Bearer t",
        "search index=main | bogus",
        &endpoints::CreateJobOptions::default(),
        3,
    )
    .await
    .unwrap_err();

    assert!(err.is_rejected_request());
    match err {
        ClientError::ApiError {
            message,
            request_id,
            ..
        } => {
            assert_eq!(
                message,
                "FATAL: Error in 'search' command; WARN: Unknown field"
            );
            assert_eq!(request_id.as_deref(), Some("req-7"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_kept_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/services/search/jobs/s1/control"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
        .mount(&mock_server)
        .await;

    let err = endpoints::cancel_job(&Client::new(), &mock_server.uri(), "Bearer t", "s1", 3)
        .await
        .unwrap_err();

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal failure");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}
