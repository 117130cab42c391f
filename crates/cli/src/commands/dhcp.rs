//! `netsift dhcp`: Windows DHCP leases followed by Palo Alto DHCP events.

use netsift_client::dedupe;
use netsift_client::query::{pa_dhcp_query, windows_dhcp_query};
use netsift_config::Config;

use super::Report;
use crate::formatters::{PA_DHCP, WINDOWS_DHCP};

pub(super) fn reports(term: &str, config: &Config) -> Vec<Report> {
    vec![
        Report {
            query: windows_dhcp_query(term, &config.indexes),
            dedupe: dedupe::windows_dhcp(),
            layout: &WINDOWS_DHCP,
        },
        Report {
            query: pa_dhcp_query(term, &config.indexes),
            dedupe: dedupe::pa_dhcp(),
            layout: &PA_DHCP,
        },
    ]
}
