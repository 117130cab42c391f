//! Report rendering for search results.
//!
//! Responsibilities:
//! - Render deduplicated records against a fixed [`ReportLayout`] as an
//!   aligned table, CSV or JSON.
//! - Apply the same missing-field placeholder in every text format.
//!
//! Does NOT handle:
//! - Printing; renderers return strings and callers decide where they go.
//! - Choosing which records to show (see `netsift_client::dedupe`).
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior |
//! |--------|---------------------|
//! | Table | The layout's "No ... located." line |
//! | CSV | Header row only |
//! | JSON | `[]` |
//!
//! ## Missing Value Handling
//!
//! | Format | Missing field |
//! |--------|---------------|
//! | Table | `Missing.` |
//! | CSV | `Missing.` |
//! | JSON | `null` |
//!
//! ## Several Reports
//!
//! A subcommand that runs more than one report prints tables one after
//! another. CSV and JSON instead become a single document through
//! [`render_combined`]: JSON is an object keyed by [`ReportLayout::key`],
//! CSV is one table with a leading `report` column.

mod csv;
mod json;
mod layout;
mod table;

use clap::ValueEnum;
use netsift_client::ResultRecord;
use thiserror::Error;

pub use layout::{
    Column, FIREWALL_FULL, FIREWALL_SHORT, LOGONS, PA_DHCP, ReportLayout, WINDOWS_DHCP,
};

/// Placeholder shown for a field the record does not carry.
pub const MISSING_PLACEHOLDER: &str = "Missing.";

/// A rendered report's layout and its deduplicated records.
pub type ReportOutput<'a> = (&'a ReportLayout, Vec<ResultRecord>);

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Csv,
    Json,
}

/// A report could not be rendered.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write CSV")]
    Csv(#[from] ::csv::Error),

    #[error("CSV output is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("failed to serialize JSON")]
    Json(#[from] serde_json::Error),
}

/// Render `records` in `format` following `layout`.
pub fn render(
    format: OutputFormat,
    layout: &ReportLayout,
    records: &[ResultRecord],
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Table => Ok(table::render(layout, records)),
        OutputFormat::Csv => csv::render(layout, records),
        OutputFormat::Json => json::render(layout, records),
    }
}

/// Render several reports as one machine-readable document.
///
/// Table output has no combined form; each report is rendered in turn and
/// the results joined by a blank line.
pub fn render_combined(
    format: OutputFormat,
    reports: &[ReportOutput<'_>],
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Table => Ok(reports
            .iter()
            .map(|(layout, records)| table::render(layout, records))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Csv => csv::render_combined(reports),
        OutputFormat::Json => json::render_combined(reports),
    }
}
