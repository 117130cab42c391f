//! Search job endpoints.
//!
//! # What this module handles:
//! - Creating search jobs
//! - Reading job status
//! - Reading one page of job results
//! - Cancelling jobs through the control endpoint

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::endpoints::{encode_path_segment, send_request_with_retry};
use crate::error::{ClientError, Result};
use crate::models::{JobStatus, ResultRecord};

/// Form parameters for `POST /services/search/jobs`.
#[derive(Debug, Clone, Default)]
pub struct CreateJobOptions {
    pub exec_mode: Option<String>,
    pub earliest_time: Option<String>,
    pub latest_time: Option<String>,
}

/// Create a new search job.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    authorization: &str,
    query: &str,
    options: &CreateJobOptions,
    max_retries: usize,
) -> Result<String> {
    debug!("Creating search job: {}", query);

    let url = format!("{}/services/search/jobs", base_url);

    let mut form_data: Vec<(&str, String)> = vec![
        ("search", query.to_string()),
        ("output_mode", "json".to_string()),
    ];
    if let Some(mode) = &options.exec_mode {
        form_data.push(("exec_mode", mode.clone()));
    }
    // Empty time bounds make Splunk answer 400.
    if let Some(earliest) = options.earliest_time.as_ref().filter(|s| !s.trim().is_empty()) {
        form_data.push(("earliest_time", earliest.clone()));
    }
    if let Some(latest) = options.latest_time.as_ref().filter(|s| !s.trim().is_empty()) {
        form_data.push(("latest_time", latest.clone()));
    }

    let builder = client
        .post(&url)
        .header("Authorization", authorization)
        .form(&form_data);
    let response = send_request_with_retry(builder, max_retries).await?;

    let resp: serde_json::Value = response.json().await?;

    // Splunk can return either:
    // - `{ "sid": "<sid>" }`
    // - `{ "entry": [ { "content": { "sid": "<sid>" } } ] }`
    let sid = resp
        .get("sid")
        .and_then(|v| v.as_str())
        .or_else(|| {
            resp.get("entry")?
                .get(0)?
                .get("content")?
                .get("sid")?
                .as_str()
        })
        .ok_or_else(|| ClientError::InvalidResponse("Missing sid in response".to_string()))?;

    Ok(sid.to_string())
}

/// Get the status of a search job.
///
/// Returns `Ok(None)` while Splunk has no status to report (HTTP 204, or a
/// body without `entry[0].content`).
pub async fn get_job_status(
    client: &Client,
    base_url: &str,
    authorization: &str,
    sid: &str,
    max_retries: usize,
) -> Result<Option<JobStatus>> {
    debug!("Getting status for job: {}", sid);

    let url = format!("{}/services/search/jobs/{}", base_url, encode_path_segment(sid));

    let builder = client
        .get(&url)
        .header("Authorization", authorization)
        .query(&[("output_mode", "json")]);
    let response = send_request_with_retry(builder, max_retries).await?;

    if response.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let body = response.bytes().await?;
    if body.is_empty() {
        return Ok(None);
    }
    let resp: serde_json::Value = serde_json::from_slice(&body)
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse job status: {}", e)))?;

    match resp.get("entry").and_then(|e| e.get(0)).and_then(|e| e.get("content")) {
        Some(content) if content.is_object() => serde_json::from_value(content.clone())
            .map(Some)
            .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse job status: {}", e))),
        _ => Ok(None),
    }
}

/// Get one page of results from a finished search job.
pub async fn get_results(
    client: &Client,
    base_url: &str,
    authorization: &str,
    sid: &str,
    offset: u64,
    count: u64,
    max_retries: usize,
) -> Result<Vec<ResultRecord>> {
    debug!(sid, offset, count, "Getting results for job");

    let url = format!(
        "{}/services/search/jobs/{}/results",
        base_url,
        encode_path_segment(sid)
    );

    let builder = client
        .get(&url)
        .header("Authorization", authorization)
        .query(&[
            ("output_mode", "json".to_string()),
            ("count", count.to_string()),
            ("offset", offset.to_string()),
        ]);
    let response = send_request_with_retry(builder, max_retries).await?;

    if response.status() == StatusCode::NO_CONTENT {
        return Ok(Vec::new());
    }

    let json: serde_json::Value = response.json().await?;

    // Handle both array and object-wrapped responses
    let rows = match json {
        serde_json::Value::Array(rows) => rows,
        serde_json::Value::Object(mut map) => match map.remove("results") {
            Some(serde_json::Value::Array(rows)) => rows,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    rows.into_iter()
        .map(|row| {
            serde_json::from_value(row).map_err(|e| {
                ClientError::InvalidResponse(format!("Failed to parse result row: {}", e))
            })
        })
        .collect()
}

/// Cancel a search job.
pub async fn cancel_job(
    client: &Client,
    base_url: &str,
    authorization: &str,
    sid: &str,
    max_retries: usize,
) -> Result<()> {
    debug!("Cancelling job: {}", sid);

    let url = format!(
        "{}/services/search/jobs/{}/control",
        base_url,
        encode_path_segment(sid)
    );

    let builder = client
        .post(&url)
        .header("Authorization", authorization)
        .form(&[("action", "cancel"), ("output_mode", "json")]);
    send_request_with_retry(builder, max_retries).await?;

    Ok(())
}
