//! `netsift firewall`: firewall traffic matching source, destination, user and action.

use netsift_client::{FirewallQuery, SearchCriteria, dedupe};
use netsift_config::Config;

use super::{Report, print_warnings};
use crate::formatters::{FIREWALL_FULL, FIREWALL_SHORT};

pub(super) fn reports(criteria: &SearchCriteria, full: bool, config: &Config) -> Vec<Report> {
    let (query, warnings) = FirewallQuery::build(criteria, &config.indexes);
    print_warnings(&warnings);

    vec![Report {
        query,
        dedupe: dedupe::firewall(),
        layout: if full { &FIREWALL_FULL } else { &FIREWALL_SHORT },
    }]
}
