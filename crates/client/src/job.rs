//! Search job lifecycle: submit, poll, fetch, cancel.
//!
//! Responsibilities:
//! - Drive one job at a time through a [`SearchBackend`].
//! - Report each status snapshot to the caller while polling.
//! - Page through results until the service returns a short page.
//! - Guarantee the job is cancelled on the service once it has been submitted.
//!
//! Does NOT handle:
//! - Building queries (see [`crate::query`]) or deduplicating results (see [`crate::dedupe`]).
//! - Rendering progress; callers receive raw [`JobStatus`] snapshots.
//!
//! Invariants:
//! - [`JobHandle`] is not `Clone` and [`JobClient::cancel`] consumes it, so a
//!   handle can be cancelled at most once.
//! - [`JobClient::run`] cancels exactly once on every path after a successful
//!   submit: success, poll failure, poll timeout, fetch failure, shutdown.
//! - Polling never outlives [`PollPolicy::timeout`].
//!
//! State machine: `Submitted -> Polling -> Done -> Fetched -> Cancelled`,
//! with any step able to fail; a failed job is still cancelled.

use std::future::Future;
use std::time::Duration;

use netsift_config::PollConfig;
use thiserror::Error;
use tracing::{debug, warn};

use crate::backend::SearchBackend;
use crate::error::ClientError;
use crate::models::{JobStatus, ResultRecord};
use crate::query::Query;

/// Owned identifier of a submitted job.
#[derive(Debug, PartialEq, Eq)]
pub struct JobHandle {
    sid: String,
}

impl JobHandle {
    pub fn sid(&self) -> &str {
        &self.sid
    }
}

/// Errors from the job lifecycle.
#[derive(Debug, Error)]
pub enum JobError {
    #[error("failed to submit search job")]
    Submit {
        #[source]
        source: ClientError,
    },

    #[error("failed to check status of search job {sid}")]
    Poll {
        sid: String,
        #[source]
        source: ClientError,
    },

    #[error("search job {sid} did not finish within {timeout:?}")]
    PollTimeout { sid: String, timeout: Duration },

    #[error("failed to fetch results of search job {sid}")]
    Fetch {
        sid: String,
        #[source]
        source: ClientError,
    },

    #[error("failed to cancel search job {sid}")]
    Cancel {
        sid: String,
        #[source]
        source: ClientError,
    },

    #[error("search job {sid} was interrupted")]
    Aborted { sid: String },
}

impl JobError {
    /// The underlying client error, when the failure came from the service.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Submit { source }
            | Self::Poll { source, .. }
            | Self::Fetch { source, .. }
            | Self::Cancel { source, .. } => Some(source),
            Self::PollTimeout { .. } | Self::Aborted { .. } => None,
        }
    }
}

/// Polling cadence, deadline and result page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    /// Sleep between status checks of a job that is not done yet.
    pub interval: Duration,
    /// Deadline for the job to report done.
    pub timeout: Duration,
    /// Records requested per results page.
    pub page_size: u64,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self::from(&PollConfig::default())
    }
}

impl From<&PollConfig> for PollPolicy {
    fn from(config: &PollConfig) -> Self {
        Self {
            interval: config.interval,
            timeout: config.timeout,
            page_size: config.page_size,
        }
    }
}

/// Runs search jobs against a backend it owns.
#[derive(Debug)]
pub struct JobClient<B> {
    backend: B,
    policy: PollPolicy,
}

impl<B: SearchBackend> JobClient<B> {
    pub fn new(backend: B) -> Self {
        Self::with_policy(backend, PollPolicy::default())
    }

    pub fn with_policy(backend: B, policy: PollPolicy) -> Self {
        Self { backend, policy }
    }

    pub fn policy(&self) -> &PollPolicy {
        &self.policy
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Create the job. Failures propagate unrecovered.
    pub async fn submit(&mut self, query: &Query) -> Result<JobHandle, JobError> {
        debug!(query = %query, earliest = %query.options().earliest, "submitting search job");
        let sid = self
            .backend
            .create_job(query)
            .await
            .map_err(|source| JobError::Submit { source })?;
        debug!(sid = %sid, "job submitted");
        Ok(JobHandle { sid })
    }

    /// Poll until the job reports done, calling `on_progress` with every status snapshot.
    ///
    /// A not-ready answer is retried at once without sleeping or reporting.
    pub async fn poll_until_done<F>(
        &mut self,
        handle: &JobHandle,
        mut on_progress: F,
    ) -> Result<JobStatus, JobError>
    where
        F: FnMut(&JobStatus),
    {
        let PollPolicy {
            interval, timeout, ..
        } = self.policy;
        let backend = &mut self.backend;
        let sid = handle.sid();

        let poll = async {
            loop {
                let status = backend
                    .job_status(sid)
                    .await
                    .map_err(|source| JobError::Poll {
                        sid: sid.to_string(),
                        source,
                    })?;

                let Some(status) = status else {
                    debug!(sid, "job status not ready yet");
                    tokio::task::yield_now().await;
                    continue;
                };

                on_progress(&status);
                if status.done {
                    debug!(sid, results = status.results, "job done");
                    return Ok(status);
                }
                tokio::time::sleep(interval).await;
            }
        };

        match tokio::time::timeout(timeout, poll).await {
            Ok(result) => result,
            Err(_) => Err(JobError::PollTimeout {
                sid: sid.to_string(),
                timeout,
            }),
        }
    }

    /// Fetch every result page of a finished job, in service order.
    pub async fn fetch_results(&mut self, handle: &JobHandle) -> Result<Vec<ResultRecord>, JobError> {
        let page_size = self.policy.page_size.max(1);
        let mut records = Vec::new();
        let mut offset = 0u64;

        loop {
            let page = self
                .backend
                .fetch_results(handle.sid(), offset, page_size)
                .await
                .map_err(|source| JobError::Fetch {
                    sid: handle.sid().to_string(),
                    source,
                })?;
            let received = page.len() as u64;
            records.extend(page);
            debug!(sid = handle.sid(), offset, received, "fetched results page");

            if received < page_size {
                break;
            }
            offset += received;
        }

        Ok(records)
    }

    /// Cancel the job on the service, consuming the handle.
    pub async fn cancel(&mut self, handle: JobHandle) -> Result<(), JobError> {
        let JobHandle { sid } = handle;
        match self.backend.cancel_job(&sid).await {
            Ok(()) => {
                debug!(sid = %sid, "job cancelled");
                Ok(())
            }
            Err(source) => Err(JobError::Cancel { sid, source }),
        }
    }

    /// Submit `query`, wait for it, fetch every record, then cancel the job.
    ///
    /// `shutdown` resolving first aborts polling or fetching with
    /// [`JobError::Aborted`]. A failed cancel is logged and never replaces
    /// the outcome of the run.
    pub async fn run<F, S>(
        &mut self,
        query: &Query,
        on_progress: F,
        shutdown: S,
    ) -> Result<Vec<ResultRecord>, JobError>
    where
        F: FnMut(&JobStatus),
        S: Future<Output = ()>,
    {
        let handle = self.submit(query).await?;

        let outcome = {
            let work = async {
                self.poll_until_done(&handle, on_progress).await?;
                self.fetch_results(&handle).await
            };
            tokio::select! {
                result = work => result,
                () = shutdown => Err(JobError::Aborted {
                    sid: handle.sid().to_string(),
                }),
            }
        };

        if let Err(e) = self.cancel(handle).await {
            warn!(error = %e, cause = ?e.client_error(), "failed to cancel search job");
        }

        outcome
    }
}
