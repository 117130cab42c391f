//! `netsift logons`: hosts a user has logged on to.

use netsift_client::dedupe;
use netsift_client::query::logon_query;
use netsift_config::Config;

use super::Report;
use crate::formatters::LOGONS;

pub(super) fn reports(user: &str, config: &Config) -> Vec<Report> {
    vec![Report {
        query: logon_query(user, &config.indexes),
        dedupe: dedupe::logons(),
        layout: &LOGONS,
    }]
}
