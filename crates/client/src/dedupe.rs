//! First-seen deduplication of result records by named key fields.
//!
//! Invariants:
//! - Output order is the order in which each key was first seen.
//! - Reducing an already reduced sequence returns it unchanged.
//! - A field absent from a record is part of the key as `None`, which is
//!   distinct from every present value including the empty string.

use std::collections::HashSet;

use crate::models::ResultRecord;

/// What to do with records that lack one of the key fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingKeyPolicy {
    /// Keep the record; the absent field takes part in the key as `None`.
    #[default]
    Keep,
    /// Drop the record.
    Skip,
}

type DedupeKey = Vec<Option<String>>;

/// Reduces records to one per composite key.
#[derive(Debug, Clone)]
pub struct Deduplicator {
    key_fields: Vec<String>,
    missing: MissingKeyPolicy,
}

impl Deduplicator {
    pub fn new<I, S>(key_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            key_fields: key_fields.into_iter().map(Into::into).collect(),
            missing: MissingKeyPolicy::default(),
        }
    }

    pub fn missing_keys(mut self, policy: MissingKeyPolicy) -> Self {
        self.missing = policy;
        self
    }

    pub fn key_fields(&self) -> &[String] {
        &self.key_fields
    }

    fn key_of(&self, record: &ResultRecord) -> DedupeKey {
        self.key_fields
            .iter()
            .map(|field| record.get(field).map(str::to_owned))
            .collect()
    }

    pub fn reduce(&self, records: Vec<ResultRecord>) -> Vec<ResultRecord> {
        let mut seen: HashSet<DedupeKey> = HashSet::with_capacity(records.len());
        let total = records.len();

        let kept: Vec<ResultRecord> = records
            .into_iter()
            .filter(|record| {
                let key = self.key_of(record);
                if self.missing == MissingKeyPolicy::Skip && key.iter().any(Option::is_none) {
                    return false;
                }
                seen.insert(key)
            })
            .collect();

        tracing::debug!(
            total,
            kept = kept.len(),
            keys = ?self.key_fields,
            "deduplicated results"
        );
        kept
    }
}

/// Deduplicate with [`MissingKeyPolicy::Keep`].
pub fn reduce<S: AsRef<str>>(records: Vec<ResultRecord>, key_fields: &[S]) -> Vec<ResultRecord> {
    Deduplicator::new(key_fields.iter().map(|f| f.as_ref().to_string())).reduce(records)
}

/// Key used for firewall events.
pub fn firewall() -> Deduplicator {
    Deduplicator::new(["application", "dest_ip", "dest_port", "src_ip"])
}

/// Key used for Windows DHCP leases. Leases without a MAC are dropped.
pub fn windows_dhcp() -> Deduplicator {
    Deduplicator::new(["mac"]).missing_keys(MissingKeyPolicy::Skip)
}

/// Key used for Palo Alto DHCP events.
pub fn pa_dhcp() -> Deduplicator {
    Deduplicator::new(["description"])
}

/// Key used for logon events. Events without a host are dropped.
pub fn logons() -> Deduplicator {
    Deduplicator::new(["host"]).missing_keys(MissingKeyPolicy::Skip)
}
