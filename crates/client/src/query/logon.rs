//! Interactive logon search tying a user to the hosts they signed in to.

use netsift_config::SearchIndexes;

use super::{ExecutionOptions, LOOKBACK_72H, Query, quote_value};

/// Columns requested from Windows logon events.
pub const LOGON_FIELDS: [&str; 3] = ["host", "EventCode", "user"];

/// Lookback for logon searches.
pub const LOGON_WINDOW: &str = LOOKBACK_72H;

/// Successful local logons (EventCode 4624) for `user`, last 72 hours.
pub fn logon_query(user: &str, indexes: &SearchIndexes) -> Query {
    let clauses = vec![
        format!("search index={}", quote_value(&indexes.windows)),
        format!("user={}", quote_value(user)),
        "EventCode=4624".to_string(),
        "app=\"win:local\"".to_string(),
    ];
    Query::from_clauses(
        &clauses,
        &LOGON_FIELDS,
        ExecutionOptions::relative(LOGON_WINDOW),
    )
}
