//! Firewall log search built from operator criteria.

use netsift_config::SearchIndexes;

use super::{ExecutionOptions, Query, QueryWarning, TimeWindow, quote_value};

/// Columns requested from firewall events.
pub const FIREWALL_FIELDS: [&str; 15] = [
    "_time",
    "host",
    "src_zone",
    "src_interface",
    "src_ip",
    "user",
    "dest_zone",
    "dest_interface",
    "dest_ip",
    "dest_port",
    "transport",
    "application",
    "rule",
    "action",
    "bytes",
];

/// Optional filters for a firewall search. Every field is raw operator input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub time: Option<String>,
    pub action: Option<String>,
    pub dest: Option<String>,
    pub source: Option<String>,
    pub user: Option<String>,
}

pub struct FirewallQuery;

impl FirewallQuery {
    /// Build the firewall search for `criteria`.
    ///
    /// Clauses are emitted in the order action, destination, source, user.
    /// Without an explicit action the search excludes allowed traffic.
    pub fn build(criteria: &SearchCriteria, indexes: &SearchIndexes) -> (Query, Vec<QueryWarning>) {
        let mut warnings = Vec::new();

        let window = match criteria.time.as_deref() {
            None => TimeWindow::default(),
            Some(raw) => raw.parse::<TimeWindow>().unwrap_or_else(|warning| {
                warnings.push(warning);
                TimeWindow::default()
            }),
        };

        let mut clauses = vec![format!("search index={}", quote_value(&indexes.firewall))];

        match criteria.action.as_deref() {
            Some("allowed") => clauses.push("action=allowed".to_string()),
            Some(other) => {
                warnings.push(QueryWarning::UnsupportedAction {
                    given: other.to_string(),
                });
                clauses.push("action!=allowed".to_string());
            }
            None => clauses.push("action!=allowed".to_string()),
        }
        if let Some(dest) = criteria.dest.as_deref() {
            clauses.push(format!("dest_ip={}", quote_value(dest)));
        }
        if let Some(source) = criteria.source.as_deref() {
            clauses.push(format!("src_ip={}", quote_value(source)));
        }
        if let Some(user) = criteria.user.as_deref() {
            clauses.push(format!("user={}", quote_value(&format!("*{user}"))));
        }

        let query = Query::from_clauses(
            &clauses,
            &FIREWALL_FIELDS,
            ExecutionOptions::relative(window.earliest()),
        );
        (query, warnings)
    }
}
