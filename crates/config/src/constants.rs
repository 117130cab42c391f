//! Centralized constants for the netsift workspace.
//!
//! Default values shared by the config, client and CLI crates.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed connection timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default Splunk management port.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;

/// Default scheme for the management endpoint.
pub const DEFAULT_SPLUNK_SCHEME: &str = "https";

/// Default maximum number of retries for failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for `SPLUNK_MAX_RETRIES`.
pub const MAX_MAX_RETRIES: usize = 10;

/// Maximum redirects followed by the HTTP client.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

// =============================================================================
// Search & Polling Defaults
// =============================================================================

/// Sleep between job status checks once the job reports progress.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Default deadline for a search job to finish (15 minutes).
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 900;

/// Maximum accepted poll deadline (24 hours).
pub const MAX_POLL_TIMEOUT_SECS: u64 = 86_400;

/// Page size used when fetching job results.
pub const DEFAULT_RESULTS_PAGE_SIZE: u64 = 100;

// =============================================================================
// Index Defaults
// =============================================================================

/// Index holding firewall traffic and vendor system logs.
pub const DEFAULT_FIREWALL_INDEX: &str = "sec_net_firewall";

/// Index holding Windows DHCP server logs.
pub const DEFAULT_DHCP_INDEX: &str = "ops_app_dhcp";

/// Index holding Windows security event logs.
pub const DEFAULT_WINDOWS_INDEX: &str = "wineventlog";
