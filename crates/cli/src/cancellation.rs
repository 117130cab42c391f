//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Provide a cloneable cancellation token tripped by Ctrl+C and awaited by
//!   the running search job as its shutdown signal.
//! - Define the `Cancelled` error used to carry operator interruption through
//!   `anyhow::Result`.
//!
//! Does NOT handle:
//! - Installing the signal handler (see `main`).
//! - Cancelling the job on the server (the job client does that once the
//!   shutdown future resolves).
//!
//! Invariants:
//! - Once cancelled, the token remains cancelled forever.

use std::fmt;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use tokio::sync::Notify;

/// Cancellation token usable across async tasks.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancellationToken {
    /// Create a new, non-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel token (idempotent).
    pub fn cancel(&self) {
        let was_cancelled = self.cancelled.swap(true, Ordering::SeqCst);
        if !was_cancelled {
            self.notify.notify_waiters();
        }
    }

    /// True if cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Await cancellation.
    ///
    /// The `notified()` future is created before the flag is checked so a
    /// cancel between the two is not missed.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Marker error used to indicate operator interruption.
#[derive(Debug, Clone, Copy)]
pub struct Cancelled;

impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cancelled")
    }
}

impl std::error::Error for Cancelled {}

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<Cancelled>())
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nSearch interrupted, job cancelled");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_cancel_wakes_waiter() {
        let token = CancellationToken::new();
        let waiter = {
            let token = token.clone();
            tokio::spawn(async move { token.cancelled().await })
        };

        tokio::task::yield_now().await;
        token.cancel();

        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter finishes")
            .expect("task joins");
    }

    #[tokio::test]
    async fn test_cancelled_returns_immediately_once_tripped() {
        let token = CancellationToken::new();
        token.cancel();
        token.cancel();

        assert!(token.is_cancelled());
        tokio::time::timeout(Duration::from_millis(100), token.cancelled())
            .await
            .expect("already cancelled");
    }

    #[test]
    fn test_is_cancelled_error() {
        assert!(is_cancelled_error(&anyhow::Error::new(Cancelled)));
        assert!(!is_cancelled_error(&anyhow::anyhow!("other failure")));
    }

    #[test]
    fn test_is_cancelled_error_through_context() {
        let err = anyhow::Error::new(Cancelled).context("Firewall logs failed");
        assert!(is_cancelled_error(&err));
    }
}
