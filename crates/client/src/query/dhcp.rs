//! DHCP lease searches against the Windows and Palo Alto sources.
//!
//! Both searches embed the raw term and its schema-specific MAC form as
//! alternative clauses, so one query finds the lease whether the operator
//! typed a hostname, an IP address or a MAC in any separator style.

use netsift_config::SearchIndexes;
use tracing::debug;

use super::{ExecutionOptions, LOOKBACK_72H, Query, quote_value};
use crate::identity::{is_address_literal, normalize_schema_a, normalize_schema_b};

/// Columns requested from Windows DHCP events.
pub const WINDOWS_DHCP_FIELDS: [&str; 8] = [
    "date",
    "time",
    "description",
    "dest",
    "dest_ip",
    "mac",
    "signature",
    "host",
];

/// Columns requested from Palo Alto DHCP system events.
pub const PA_DHCP_FIELDS: [&str; 3] = ["generated_time", "dvc_name", "description"];

fn wildcard(value: &str) -> String {
    quote_value(&format!("*{value}*")).into_owned()
}

/// Windows DHCP server log search, last 72 hours.
pub fn windows_dhcp_query(term: &str, indexes: &SearchIndexes) -> Query {
    let mac = if is_address_literal(term) {
        term.to_string()
    } else {
        normalize_schema_a(term)
    };
    let t = wildcard(term);
    let clauses = vec![
        format!("search index={}", quote_value(&indexes.dhcp)),
        "signature!=\"DNS*\"".to_string(),
        format!(
            "(description={t} OR dest={t} OR dest_ip={t} OR mac={})",
            wildcard(&mac)
        ),
    ];
    Query::from_clauses(
        &clauses,
        &WINDOWS_DHCP_FIELDS,
        ExecutionOptions::relative(LOOKBACK_72H),
    )
}

/// Palo Alto DHCP system log search, last 72 hours.
///
/// A term that cannot be read as a MAC is searched as a literal twice.
pub fn pa_dhcp_query(term: &str, indexes: &SearchIndexes) -> Query {
    let mac = if is_address_literal(term) {
        term.to_string()
    } else {
        normalize_schema_b(term).unwrap_or_else(|e| {
            debug!(error = %e, "term is not a hardware address, searching literally");
            term.to_string()
        })
    };
    let clauses = vec![
        format!("search index={}", quote_value(&indexes.firewall)),
        "sourcetype=\"pan:system\"".to_string(),
        "log_subtype=dhcp".to_string(),
        format!(
            "(description={} OR description={})",
            wildcard(term),
            wildcard(&mac)
        ),
    ];
    Query::from_clauses(
        &clauses,
        &PA_DHCP_FIELDS,
        ExecutionOptions::relative(LOOKBACK_72H),
    )
}
