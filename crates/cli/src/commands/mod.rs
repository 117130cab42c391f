//! Subcommand implementations.
//!
//! Responsibilities:
//! - Route the parsed subcommand to its handler.
//! - Run each report's search job with progress, deduplicate, render and print it.
//! - Merge CSV or JSON output of multi-report subcommands into one document.
//!
//! Does NOT handle:
//! - Building queries (see `netsift_client::query`).
//! - Configuration loading (see `main`).
//!
//! Invariants:
//! - Results go to stdout; status lines and progress go to stderr.
//! - A failed report is reported and the remaining reports still run;
//!   the first failure decides the exit code.
//! - Operator interruption stops the invocation at once.

mod dhcp;
mod firewall;
mod logons;

use anyhow::{Context, Result};
use netsift_client::{
    Deduplicator, JobClient, JobError, PollPolicy, Query, QueryWarning, ResultRecord,
    SearchCriteria, SplunkClient,
};
use netsift_config::Config;
use tracing::debug;

use crate::args::{Cli, Commands};
use crate::cancellation::{Cancelled, CancellationToken, is_cancelled_error};
use crate::formatters::{self, OutputFormat, ReportLayout};
use crate::progress::SearchProgress;

/// Output settings shared by every subcommand.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OutputSettings {
    pub format: OutputFormat,
    pub quiet: bool,
}

impl OutputSettings {
    fn status(&self, message: impl std::fmt::Display) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }
}

/// One search job and how its results are reduced and shown.
pub(crate) struct Report {
    pub query: Query,
    pub dedupe: Deduplicator,
    pub layout: &'static ReportLayout,
}

/// Dispatch the parsed command line.
pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel: &CancellationToken,
) -> Result<()> {
    let output = OutputSettings {
        format: cli.output,
        quiet: cli.quiet,
    };

    let reports = match cli.command {
        Commands::Firewall {
            action,
            dest,
            source,
            time,
            user,
            full,
        } => {
            let criteria = SearchCriteria {
                time,
                action,
                dest,
                source,
                user,
            };
            firewall::reports(&criteria, full, &config)
        }
        Commands::Dhcp { search } => dhcp::reports(&search, &config),
        Commands::Logons { search } => logons::reports(&search, &config),
    };

    let client = SplunkClient::builder().from_config(&config).build()?;
    let mut jobs = JobClient::with_policy(client, PollPolicy::from(&config.poll));
    run_reports(&mut jobs, reports, output, cancel).await
}

/// Print operator-facing warnings about the criteria. Not silenced by `--quiet`.
pub(crate) fn print_warnings(warnings: &[QueryWarning]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

async fn run_reports(
    jobs: &mut JobClient<SplunkClient>,
    reports: Vec<Report>,
    output: OutputSettings,
    cancel: &CancellationToken,
) -> Result<()> {
    // Machine formats from several reports are printed as one document.
    let combine = output.format != OutputFormat::Table && reports.len() > 1;
    let mut collected = Vec::new();
    let mut first_failure: Option<anyhow::Error> = None;

    for report in &reports {
        let outcome = collect(jobs, report, output, cancel)
            .await
            .and_then(|records| {
                if combine {
                    collected.push((report.layout, records));
                } else {
                    print_rendered(&formatters::render(output.format, report.layout, &records)?);
                }
                Ok(())
            })
            .with_context(|| format!("{} failed", report.layout.title));

        if let Err(e) = outcome {
            debug!(report = report.layout.title, error = ?e, "report failed");
            note_failure(&mut first_failure, e)?;
        }
    }

    if combine && !collected.is_empty() {
        match formatters::render_combined(output.format, &collected) {
            Ok(rendered) => print_rendered(&rendered),
            Err(e) => note_failure(&mut first_failure, e.into())?,
        }
    }

    first_failure.map_or(Ok(()), Err)
}

/// Keep the first failure for the exit code and print later ones inline.
/// Interruption is returned at once.
fn note_failure(first_failure: &mut Option<anyhow::Error>, e: anyhow::Error) -> Result<()> {
    if is_cancelled_error(&e) {
        return Err(e);
    }
    if first_failure.is_some() {
        eprintln!("{e:#}");
    } else {
        *first_failure = Some(e);
    }
    Ok(())
}

fn print_rendered(rendered: &str) {
    println!("{}", rendered.trim_end_matches('\n'));
}

/// Run a report's search and reduce its records.
async fn collect(
    jobs: &mut JobClient<SplunkClient>,
    report: &Report,
    output: OutputSettings,
    cancel: &CancellationToken,
) -> Result<Vec<ResultRecord>> {
    output.status(format_args!("Searching {}..", report.layout.title));
    output.status(format_args!("Query to be used: {}", report.query));

    let records = search(jobs, report, output, cancel).await?;
    Ok(report.dedupe.reduce(records))
}

async fn search(
    jobs: &mut JobClient<SplunkClient>,
    report: &Report,
    output: OutputSettings,
    cancel: &CancellationToken,
) -> Result<Vec<ResultRecord>> {
    let progress = SearchProgress::new(!output.quiet, report.layout.title);

    match jobs
        .run(
            &report.query,
            |status| progress.update(status),
            cancel.cancelled(),
        )
        .await
    {
        Ok(records) => {
            progress.finish();
            Ok(records)
        }
        Err(JobError::Aborted { .. }) => Err(Cancelled.into()),
        Err(e) => Err(e.into()),
    }
}
