//! Search job progress indicator.
//!
//! Responsibilities:
//! - Show percent complete plus the scanned, matched and result counts of
//!   the running job.
//! - Write ALL progress output to STDERR, so machine-readable results on
//!   stdout (json/csv/table) are not contaminated.
//! - Become a no-op when disabled via `--quiet`.
//!
//! Non-responsibilities:
//! - This module does not decide *when* progress should be shown; callers do.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use netsift_client::JobStatus;
use std::time::Duration;

/// A percent-based progress bar for one search job.
pub(crate) struct SearchProgress {
    label: String,
    pb: Option<ProgressBar>,
}

impl SearchProgress {
    /// Create a new search progress indicator.
    ///
    /// `enabled` should be `!quiet`.
    pub(crate) fn new(enabled: bool, label: impl Into<String>) -> Self {
        let label = label.into();

        if !enabled {
            return Self { label, pb: None };
        }

        let pb = ProgressBar::new(100);
        pb.set_draw_target(ProgressDrawTarget::stderr());
        pb.set_style(
            ProgressStyle::with_template("{spinner} {prefix} [{bar:30.cyan/blue}] {pos:>3}%  {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb.set_prefix(label.clone());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self {
            label,
            pb: Some(pb),
        }
    }

    /// Show a status snapshot reported by the job client.
    pub(crate) fn update(&self, status: &JobStatus) {
        let Some(pb) = &self.pb else {
            return;
        };

        pb.set_position(percent_position(status.progress));
        pb.set_message(status_line(status));
    }

    /// Finish the progress indicator with a stable message (on STDERR).
    pub(crate) fn finish(&self) {
        let Some(pb) = &self.pb else {
            return;
        };

        pb.set_position(100);
        pb.finish_with_message(format!("{} done", self.label));
    }
}

impl Drop for SearchProgress {
    fn drop(&mut self) {
        // Clear an unfinished bar so it does not interleave with error output.
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }
}

fn percent_position(done_progress: f64) -> u64 {
    (done_progress.clamp(0.0, 1.0) * 100.0).round() as u64
}

fn status_line(status: &JobStatus) -> String {
    format!(
        "{} scanned  {} matched  {} results",
        status.scanned, status.matched, status.results
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_position_rounds_and_clamps() {
        assert_eq!(percent_position(0.0), 0);
        assert_eq!(percent_position(0.425), 43);
        assert_eq!(percent_position(1.0), 100);
        assert_eq!(percent_position(1.7), 100);
        assert_eq!(percent_position(-0.2), 0);
    }

    #[test]
    fn test_status_line() {
        let status = JobStatus {
            done: false,
            progress: 0.5,
            scanned: 1500,
            matched: 120,
            results: 7,
        };
        assert_eq!(status_line(&status), "1500 scanned  120 matched  7 results");
    }

    #[test]
    fn test_disabled_progress_is_noop() {
        let progress = SearchProgress::new(false, "Firewall");
        progress.update(&JobStatus::default());
        progress.finish();
        assert!(progress.pb.is_none());
    }
}
