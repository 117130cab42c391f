//! Asynchronous Splunk search-job client.
//!
//! This crate builds security queries from structured criteria, runs them as
//! Splunk search jobs (submit, poll with progress, page through results,
//! cancel) and deduplicates the returned records by named key fields.
//!
//! [`JobClient`] owns the job lifecycle and works against any
//! [`SearchBackend`]; [`SplunkClient`] is the REST implementation.

mod auth;
pub mod backend;
pub mod client;
pub mod dedupe;
pub mod endpoints;
pub mod error;
pub mod identity;
pub mod job;
pub mod models;
pub mod query;
mod serde_helpers;

pub use auth::{AuthStrategy, SessionManager};
pub use backend::SearchBackend;
pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use dedupe::{Deduplicator, MissingKeyPolicy};
pub use error::{ClientError, Result};
pub use identity::FormatError;
pub use job::{JobClient, JobError, JobHandle, PollPolicy};
pub use models::{JobStatus, ResultRecord, SplunkMessage, SplunkMessages};
pub use query::{
    ExecutionOptions, FirewallQuery, Query, QueryWarning, SearchCriteria, SearchMode, TimeWindow,
};
