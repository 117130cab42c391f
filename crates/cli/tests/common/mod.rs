//! Shared test utilities for netsift integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the mock Splunk endpoints a complete search job touches.
//!
//! Invariants / Assumptions:
//! - `SPLUNK_API_TOKEN` is set to "test-token" unless overridden.
//! - Polling is shortened so jobs finish in milliseconds.

use assert_cmd::Command;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[allow(dead_code)]
pub const SID: &str = "1700000000.42";

/// Returns a hermetic `netsift` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `SPLUNK_API_TOKEN` is set to a dummy value to satisfy config validation.
/// - Other connection env vars are cleared so nothing leaks from the host.
pub fn netsift_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("netsift");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("SPLUNK_API_TOKEN", "test-token");
    cmd.env("NETSIFT_POLL_INTERVAL_MS", "10");

    for var in [
        "SPLUNK_BASE_URL",
        "SPLUNK_HOST",
        "SPLUNK_PORT",
        "SPLUNK_SCHEME",
        "SPLUNK_USER",
        "SPLUNK_USERNAME",
        "SPLUNK_PASS",
        "SPLUNK_PASSWORD",
        "SPLUNK_SKIP_VERIFY",
        "SPLUNK_TIMEOUT",
        "SPLUNK_MAX_RETRIES",
        "NETSIFT_POLL_TIMEOUT_SECS",
        "NETSIFT_FIREWALL_INDEX",
        "NETSIFT_DHCP_INDEX",
        "NETSIFT_WINDOWS_INDEX",
        "RUST_LOG",
    ] {
        cmd.env_remove(var);
    }

    cmd
}

/// Returns a hermetic `netsift` command pointed at `base_url`.
#[allow(dead_code)]
pub fn netsift_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = netsift_cmd();
    cmd.env("SPLUNK_BASE_URL", base_url);
    cmd
}

/// Mount `jobs` searches that are each created, reported done, return
/// `results` in one page and are cancelled once.
#[allow(dead_code)]
pub async fn mount_finished_jobs(server: &MockServer, jobs: u64, results: Vec<Value>) {
    Mock::given(method("POST"))
        .and(path("/services/search/jobs"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "sid": SID })))
        .expect(jobs)
        .mount(server)
        .await;

    mount_job_lifecycle(server, jobs, results).await;
}

/// Mount status, results and cancel endpoints for an already created job.
#[allow(dead_code)]
pub async fn mount_job_lifecycle(server: &MockServer, jobs: u64, results: Vec<Value>) {
    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{SID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "entry": [{
                "content": {
                    "sid": SID,
                    "isDone": true,
                    "doneProgress": 1.0,
                    "scanCount": 500,
                    "eventCount": 12,
                    "resultCount": results.len(),
                    "dispatchState": "DONE"
                }
            }]
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/services/search/jobs/{SID}/results")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": results })))
        .mount(server)
        .await;

    Mock::given(method("POST"))
        .and(path(format!("/services/search/jobs/{SID}/control")))
        .respond_with(ResponseTemplate::new(200))
        .expect(jobs)
        .mount(server)
        .await;
}
