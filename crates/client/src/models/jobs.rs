//! Search job status model.

use serde::{Deserialize, Serialize};

/// Snapshot of a running search job.
///
/// Deserialized from the `entry[0].content` object of
/// `GET /services/search/jobs/{sid}`. Each poll produces a fresh snapshot;
/// nothing is accumulated between them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JobStatus {
    #[serde(
        rename = "isDone",
        default,
        deserialize_with = "crate::serde_helpers::bool_from_string_or_number"
    )]
    pub done: bool,
    /// Completion fraction, always within `[0, 1]`.
    #[serde(
        rename = "doneProgress",
        default,
        deserialize_with = "crate::serde_helpers::fraction_from_string_or_number"
    )]
    pub progress: f64,
    #[serde(
        rename = "scanCount",
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub scanned: u64,
    #[serde(
        rename = "eventCount",
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub matched: u64,
    #[serde(
        rename = "resultCount",
        default,
        deserialize_with = "crate::serde_helpers::u64_from_string_or_number"
    )]
    pub results: u64,
}

impl JobStatus {
    /// Progress as a whole percentage, e.g. `42.5` for `0.425`.
    pub fn percent(&self) -> f64 {
        self.progress * 100.0
    }
}
