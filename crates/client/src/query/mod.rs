//! Search query construction.
//!
//! Responsibilities:
//! - Turn typed criteria into SPL text plus execution options (time bounds, mode).
//! - Record the ordered field projection requested by each query's `table` clause.
//! - Quote operator-supplied values so they cannot alter the query structure.
//!
//! Does NOT handle:
//! - Submitting or running the query (see [`crate::job`]).
//!
//! Invariants:
//! - Building a query is pure: no I/O, no clock reads.
//! - A [`Query`] is immutable once built.

mod dhcp;
mod firewall;
mod logon;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

pub use dhcp::{PA_DHCP_FIELDS, WINDOWS_DHCP_FIELDS, pa_dhcp_query, windows_dhcp_query};
pub use firewall::{FIREWALL_FIELDS, FirewallQuery, SearchCriteria};
pub use logon::{LOGON_FIELDS, LOGON_WINDOW, logon_query};

/// Lookback used by the DHCP and logon searches.
pub(crate) const LOOKBACK_72H: &str = "-72h";

/// Job execution mode. Only `normal` jobs are created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMode {
    #[default]
    Normal,
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
        }
    }
}

/// Time bounds and mode for a search job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOptions {
    pub mode: SearchMode,
    /// Backend-relative earliest bound, e.g. `-30m`.
    pub earliest: String,
    pub latest: String,
}

impl ExecutionOptions {
    pub(crate) fn relative(earliest: impl Into<String>) -> Self {
        Self {
            mode: SearchMode::Normal,
            earliest: earliest.into(),
            latest: "now".to_string(),
        }
    }
}

/// The fixed set of lookback windows accepted for firewall searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeWindow {
    Minutes15,
    #[default]
    Minutes30,
    Hours1,
    Hours4,
    Hours8,
    Hours12,
    Hours16,
    Hours24,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 8] = [
        Self::Minutes15,
        Self::Minutes30,
        Self::Hours1,
        Self::Hours4,
        Self::Hours8,
        Self::Hours12,
        Self::Hours16,
        Self::Hours24,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minutes15 => "15m",
            Self::Minutes30 => "30m",
            Self::Hours1 => "1h",
            Self::Hours4 => "4h",
            Self::Hours8 => "8h",
            Self::Hours12 => "12h",
            Self::Hours16 => "16h",
            Self::Hours24 => "24h",
        }
    }

    /// Earliest bound relative to now, e.g. `-30m`.
    pub fn earliest(&self) -> String {
        format!("-{}", self.as_str())
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = QueryWarning;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| QueryWarning::InvalidTimeWindow {
                given: s.to_string(),
            })
    }
}

/// Non-fatal problems with operator criteria. The query is still built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryWarning {
    InvalidTimeWindow { given: String },
    UnsupportedAction { given: String },
}

impl fmt::Display for QueryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTimeWindow { given } => write!(
                f,
                "{given} was not a valid time option. Time set to {}.",
                TimeWindow::default()
            ),
            Self::UnsupportedAction { given } => write!(
                f,
                "{given} was passed for an action. Query will parse as 'action!=allowed'."
            ),
        }
    }
}

/// A ready-to-submit search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    options: ExecutionOptions,
    projection: Vec<String>,
}

impl Query {
    /// Assemble `<clauses> | table <projection>`.
    pub(crate) fn from_clauses(
        clauses: &[String],
        projection: &[&str],
        options: ExecutionOptions,
    ) -> Self {
        let text = format!("{} | table {}", clauses.join(" "), projection.join(" "));
        Self {
            text,
            options,
            projection: projection.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// SPL text, starting with `search`.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &ExecutionOptions {
        &self.options
    }

    /// Fields requested by the `table` clause, in order.
    pub fn projection(&self) -> &[String] {
        &self.projection
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn is_safe_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | ':' | '-' | '_' | '*' | '@' | '/' | '\\')
}

/// Insert `value` verbatim if it is made of safe characters, else double-quote it.
pub fn quote_value(value: &str) -> Cow<'_, str> {
    if !value.is_empty() && value.chars().all(is_safe_char) {
        return Cow::Borrowed(value);
    }
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    Cow::Owned(quoted)
}
