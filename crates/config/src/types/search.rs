//! Search job polling and index settings.

use std::time::Duration;

use crate::constants::{
    DEFAULT_DHCP_INDEX, DEFAULT_FIREWALL_INDEX, DEFAULT_POLL_INTERVAL_MS,
    DEFAULT_POLL_TIMEOUT_SECS, DEFAULT_RESULTS_PAGE_SIZE, DEFAULT_WINDOWS_INDEX,
};

/// How the job client waits for a search job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollConfig {
    /// Sleep between status checks once the job reports progress.
    pub interval: Duration,
    /// Deadline for the job to report completion.
    pub timeout: Duration,
    /// Number of results requested per page.
    pub page_size: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            timeout: Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS),
            page_size: DEFAULT_RESULTS_PAGE_SIZE,
        }
    }
}

/// Index names searched by the subcommands.
///
/// These differ per Splunk deployment, so every one is overridable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndexes {
    /// Firewall traffic and vendor system logs (DHCP included).
    pub firewall: String,
    /// Windows DHCP server logs.
    pub dhcp: String,
    /// Windows security event logs.
    pub windows: String,
}

impl Default for SearchIndexes {
    fn default() -> Self {
        Self {
            firewall: DEFAULT_FIREWALL_INDEX.to_string(),
            dhcp: DEFAULT_DHCP_INDEX.to_string(),
            windows: DEFAULT_WINDOWS_INDEX.to_string(),
        }
    }
}
