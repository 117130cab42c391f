//! Serde helpers for Splunk's inconsistent JSON typing.
//!
//! Responsibilities:
//! - Provide deserializers that accept either JSON numbers or strings for numeric fields.
//! - Keep parsing behavior centralized so model definitions stay readable and consistent.
//!
//! Explicitly does NOT handle:
//! - Validating higher-level semantics (ranges, required/optional business rules).
//!
//! Invariants / assumptions:
//! - Splunk may return numeric fields as `"123"` strings or as `123` numbers depending on endpoint/version.
//! - Booleans may arrive as `true`, `1`, `"1"` or `"true"`.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    F64(f64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum F64OrString {
    F64(f64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BoolOrNumberOrString {
    Bool(bool),
    U64(u64),
    String(String),
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = U64OrString::deserialize(deserializer)?;
    match value {
        U64OrString::U64(v) => Ok(v),
        U64OrString::I64(v) => u64::try_from(v).map_err(D::Error::custom),
        U64OrString::F64(v) if v >= 0.0 && v.fract() == 0.0 => Ok(v as u64),
        U64OrString::F64(v) => Err(D::Error::custom(format!("not a count: {v}"))),
        U64OrString::String(s) => s.trim().parse::<u64>().map_err(D::Error::custom),
    }
}

/// Parse a progress fraction and clamp it into `[0, 1]`.
pub fn fraction_from_string_or_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = match F64OrString::deserialize(deserializer)? {
        F64OrString::F64(v) => v,
        F64OrString::String(s) => s.trim().parse::<f64>().map_err(D::Error::custom)?,
    };
    if value.is_nan() {
        return Err(D::Error::custom("progress is NaN"));
    }
    Ok(value.clamp(0.0, 1.0))
}

pub fn bool_from_string_or_number<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match BoolOrNumberOrString::deserialize(deserializer)? {
        BoolOrNumberOrString::Bool(b) => Ok(b),
        BoolOrNumberOrString::U64(v) => Ok(v != 0),
        BoolOrNumberOrString::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "1" | "true" => Ok(true),
            "0" | "false" | "" => Ok(false),
            other => Err(D::Error::custom(format!("not a boolean: {other}"))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(deserialize_with = "u64_from_string_or_number")]
        count: u64,
        #[serde(deserialize_with = "fraction_from_string_or_number")]
        progress: f64,
        #[serde(deserialize_with = "bool_from_string_or_number")]
        done: bool,
    }

    #[test]
    fn test_accepts_native_types() {
        let p: Probe =
            serde_json::from_str(r#"{"count": 42, "progress": 0.5, "done": true}"#).unwrap();
        assert_eq!(p.count, 42);
        assert_eq!(p.progress, 0.5);
        assert!(p.done);
    }

    #[test]
    fn test_accepts_strings() {
        let p: Probe =
            serde_json::from_str(r#"{"count": "42", "progress": "0.25", "done": "1"}"#).unwrap();
        assert_eq!(p.count, 42);
        assert_eq!(p.progress, 0.25);
        assert!(p.done);
    }

    #[test]
    fn test_progress_is_clamped() {
        let p: Probe =
            serde_json::from_str(r#"{"count": 0, "progress": 1.7, "done": 0}"#).unwrap();
        assert_eq!(p.progress, 1.0);
        assert!(!p.done);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(
            serde_json::from_str::<Probe>(r#"{"count": "many", "progress": 0, "done": true}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<Probe>(r#"{"count": -1, "progress": 0, "done": true}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<Probe>(r#"{"count": 1, "progress": 0, "done": "maybe"}"#)
                .is_err()
        );
    }
}
