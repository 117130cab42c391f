//! Hardware address normalization for the two DHCP log schemas.
//!
//! Responsibilities:
//! - Normalize free-form MAC addresses into the Windows DHCP form
//!   (`AABBCCDDEEFF`, schema A) and the Palo Alto form (`aa:bb:cc:dd:ee:ff`, schema B).
//! - Recognize IPv4 literals, which are searched verbatim instead.
//!
//! Invariants:
//! - Separators `.`, `:`, `-` and any whitespace are stripped before normalizing.
//! - None of these functions panic on arbitrary input.

use std::net::Ipv4Addr;
use thiserror::Error;

/// The input could not be read as a hardware identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("identifier is empty after removing separators")]
    Empty,

    #[error("identifier contains non-alphanumeric character {0:?}")]
    InvalidCharacter(char),

    #[error("identifier has odd length {0} and cannot be split into octets")]
    OddLength(usize),
}

fn strip_separators(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '.' | ':' | '-') && !c.is_whitespace())
        .collect()
}

/// Windows DHCP form: separators removed, upper-cased.
pub fn normalize_schema_a(raw: &str) -> String {
    strip_separators(raw).to_uppercase()
}

/// Palo Alto form: separators removed, lower-cased, colon between every octet.
pub fn normalize_schema_b(raw: &str) -> Result<String, FormatError> {
    let stripped = strip_separators(raw).to_lowercase();
    if stripped.is_empty() {
        return Err(FormatError::Empty);
    }
    if let Some(bad) = stripped.chars().find(|c| !c.is_ascii_alphanumeric()) {
        return Err(FormatError::InvalidCharacter(bad));
    }
    if stripped.len() % 2 != 0 {
        return Err(FormatError::OddLength(stripped.len()));
    }

    let pairs: Vec<&str> = stripped
        .as_bytes()
        .chunks(2)
        .filter_map(|pair| std::str::from_utf8(pair).ok())
        .collect();
    Ok(pairs.join(":"))
}

/// Strict dotted-quad IPv4 check. `10.0.0.999`, `10.0.0` and `010.0.0.1` are rejected.
pub fn is_address_literal(raw: &str) -> bool {
    raw.parse::<Ipv4Addr>().is_ok()
}
