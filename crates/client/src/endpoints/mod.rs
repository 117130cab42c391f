//! REST API endpoint implementations.
//!
//! Every function takes the shared `reqwest::Client`, the normalized base URL
//! and a ready `Authorization` header value. Session handling lives in
//! [`crate::client`].

mod auth;
mod jobs;
mod request;
pub mod url_encoding;

pub use auth::login;
pub use jobs::{CreateJobOptions, cancel_job, create_job, get_job_status, get_results};
pub use request::send_request_with_retry;
pub use url_encoding::encode_path_segment;
