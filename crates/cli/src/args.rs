//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Carry connection overrides that take precedence over the environment.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not read the environment; `netsift_config::ConfigLoader` does.

use clap::builder::NonEmptyStringValueParser;
use clap::{Parser, Subcommand};

use crate::formatters::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "netsift")]
#[command(
    about = "Search Splunk firewall, DHCP and logon events from the command line",
    long_about = None
)]
#[command(version)]
#[command(
    after_help = "Examples:\n  netsift firewall -d 10.1.2.3 -t 4h\n  netsift firewall -a allowed -s 10.0.0.5 --full\n  netsift dhcp -s aa:bb:cc:dd:ee:ff\n  netsift -o json logons -s jdoe\n"
)]
pub struct Cli {
    /// Base URL of the Splunk management port (e.g., https://splunk.example.com:8089)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Splunk host, used when no base URL is given
    #[arg(long, global = true)]
    pub host: Option<String>,

    /// Splunk management port
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// URL scheme (https or http)
    #[arg(long, global = true)]
    pub scheme: Option<String>,

    /// Username for session authentication
    #[arg(long, global = true)]
    pub username: Option<String>,

    /// Password for session authentication
    #[arg(long, global = true)]
    pub password: Option<String>,

    /// API token (preferred over username/password)
    #[arg(long, global = true)]
    pub api_token: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// HTTP request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Give up on a search job that has not finished after this many seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub poll_timeout: Option<u64>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Suppress progress and status output on stderr
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search firewall traffic logs (blocked traffic unless `-a allowed`)
    Firewall {
        /// Only `allowed` is accepted; anything else searches for non-allowed traffic
        #[arg(short, long)]
        action: Option<String>,

        /// Destination IP address
        #[arg(short, long)]
        dest: Option<String>,

        /// Source IP address
        #[arg(short, long)]
        source: Option<String>,

        /// How far back to search: 15m, 30m, 1h, 4h, 8h, 12h, 16h or 24h
        #[arg(short, long)]
        time: Option<String>,

        /// Scope results to a user (suffix match)
        #[arg(short, long)]
        user: Option<String>,

        /// Show every column, e.g. for a ticket
        #[arg(long)]
        full: bool,
    },

    /// Search Windows and Palo Alto DHCP logs for a MAC, IP or hostname (last 72h)
    Dhcp {
        /// MAC address in any common notation, IPv4 address or hostname fragment
        #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
        search: String,
    },

    /// Map a user to the machines they logged on to (EventCode 4624, last 72h)
    Logons {
        /// Username to search
        #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
        search: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_firewall_flags() {
        let cli = Cli::try_parse_from([
            "netsift", "firewall", "-a", "allowed", "-d", "1.2.3.4", "-t", "4h", "--full",
        ])
        .unwrap();

        match cli.command {
            Commands::Firewall {
                action,
                dest,
                time,
                full,
                source,
                user,
            } => {
                assert_eq!(action.as_deref(), Some("allowed"));
                assert_eq!(dest.as_deref(), Some("1.2.3.4"));
                assert_eq!(time.as_deref(), Some("4h"));
                assert!(full);
                assert!(source.is_none());
                assert!(user.is_none());
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(cli.output, OutputFormat::Table);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "netsift",
            "logons",
            "-s",
            "jdoe",
            "-o",
            "json",
            "--quiet",
            "--poll-timeout",
            "60",
        ])
        .unwrap();

        assert_eq!(cli.output, OutputFormat::Json);
        assert!(cli.quiet);
        assert_eq!(cli.poll_timeout, Some(60));
    }

    #[test]
    fn test_dhcp_requires_search_term() {
        assert!(Cli::try_parse_from(["netsift", "dhcp"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_output_format() {
        assert!(Cli::try_parse_from(["netsift", "-o", "xml", "logons", "-s", "x"]).is_err());
    }

    #[test]
    fn test_empty_search_term_is_rejected() {
        for command in ["dhcp", "logons"] {
            let err = Cli::try_parse_from(["netsift", command, "-s", ""]).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::InvalidValue, "{command}");
        }
    }
}
