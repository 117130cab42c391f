//! The seam between the job lifecycle and the service that runs searches.
//!
//! [`crate::SplunkClient`] is the production implementation. Tests drive
//! [`crate::job::JobClient`] with scripted in-memory backends.

use std::future::Future;

use crate::error::ClientError;
use crate::models::{JobStatus, ResultRecord};
use crate::query::Query;

/// Remote search job service.
///
/// Methods take `&mut self` because a session-authenticated backend may
/// log in (and store the session key) on any call.
pub trait SearchBackend {
    /// Create a job and return its search id.
    fn create_job(&mut self, query: &Query) -> impl Future<Output = Result<String, ClientError>>;

    /// Current status of the job, or `None` while the service has no status to report yet.
    fn job_status(
        &mut self,
        sid: &str,
    ) -> impl Future<Output = Result<Option<JobStatus>, ClientError>>;

    /// One page of results starting at `offset`, at most `count` records.
    fn fetch_results(
        &mut self,
        sid: &str,
        offset: u64,
        count: u64,
    ) -> impl Future<Output = Result<Vec<ResultRecord>, ClientError>>;

    /// Stop the job and release its resources on the service.
    fn cancel_job(&mut self, sid: &str) -> impl Future<Output = Result<(), ClientError>>;
}
