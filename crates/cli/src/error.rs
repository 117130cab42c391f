//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map configuration, client and job errors to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for the interrupt path).
//!
//! Invariants:
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use netsift_client::{ClientError, JobError};
use netsift_config::ConfigError;

use crate::cancellation::Cancelled;

/// Structured exit codes for netsift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - every report was produced.
    Success = 0,

    /// General error - configuration problems or unclassified failures.
    GeneralError = 1,

    /// Authentication failure - invalid credentials, token or expired session.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// The search was rejected by Splunk (bad request).
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Splunk kept answering 502/503/504, or the job did not finish in time.
    ///
    /// Scripts should back off and retry later.
    ServiceUnavailable = 8,

    /// Interrupted - SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        if err.is_auth_error() {
            ExitCode::AuthenticationFailed
        } else if err.is_connection_error() {
            ExitCode::ConnectionError
        } else if err.is_rejected_request() {
            ExitCode::ValidationError
        } else if err.is_unavailable() {
            ExitCode::ServiceUnavailable
        } else {
            ExitCode::GeneralError
        }
    }
}

impl From<&JobError> for ExitCode {
    fn from(err: &JobError) -> Self {
        match err {
            JobError::PollTimeout { .. } => ExitCode::ServiceUnavailable,
            JobError::Aborted { .. } => ExitCode::Interrupted,
            other => other
                .client_error()
                .map(ExitCode::from)
                .unwrap_or(ExitCode::GeneralError),
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if cause.is::<Cancelled>() {
                return ExitCode::Interrupted;
            }
            if let Some(job_err) = cause.downcast_ref::<JobError>() {
                return ExitCode::from(job_err);
            }
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.is::<ConfigError>() {
                return ExitCode::GeneralError;
            }
        }

        ExitCode::GeneralError
    }
}
