//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse environment variables for Splunk and netsift settings.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.
//! - Values already set on the loader are never overwritten.

use secrecy::SecretString;
use std::str::FromStr;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::MAX_MAX_RETRIES;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// First non-empty value among several variable names.
///
/// The operator scripts used `SPLUNK_USER`/`SPLUNK_PASS`; the longer names are
/// accepted as well.
fn first_env_var(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env_var_or_none(key))
}

fn parse_env<T: FromStr>(var: &str, message: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: message.to_string(),
            })
        })
        .transpose()
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if loader.base_url().is_none() {
        loader.set_base_url(env_var_or_none("SPLUNK_BASE_URL"));
    }
    if loader.host().is_none() {
        loader.set_host(env_var_or_none("SPLUNK_HOST"));
    }
    if loader.port().is_none() {
        loader.set_port(parse_env("SPLUNK_PORT", "must be a port number (1-65535)")?);
    }
    if loader.scheme().is_none() {
        loader.set_scheme(env_var_or_none("SPLUNK_SCHEME"));
    }
    if loader.username().is_none() {
        loader.set_username(first_env_var(&["SPLUNK_USER", "SPLUNK_USERNAME"]));
    }
    if !loader.has_password()
        && let Some(password) = first_env_var(&["SPLUNK_PASS", "SPLUNK_PASSWORD"])
    {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if !loader.has_api_token()
        && let Some(token) = env_var_or_none("SPLUNK_API_TOKEN")
    {
        loader.set_api_token(Some(SecretString::new(token.into())));
    }
    if loader.skip_verify().is_none() {
        loader.set_skip_verify(parse_env("SPLUNK_SKIP_VERIFY", "must be true or false")?);
    }
    if loader.timeout().is_none() {
        let secs: Option<u64> = parse_env("SPLUNK_TIMEOUT", "must be a number")?;
        loader.set_timeout(secs.map(Duration::from_secs));
    }
    if loader.max_retries().is_none() {
        let value: Option<usize> =
            parse_env("SPLUNK_MAX_RETRIES", "must be a non-negative integer")?;
        if let Some(value) = value
            && value > MAX_MAX_RETRIES
        {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be between 0 and {} (got {})", MAX_MAX_RETRIES, value),
            });
        }
        loader.set_max_retries(value);
    }
    if loader.poll_interval().is_none() {
        let ms: Option<u64> = parse_env("NETSIFT_POLL_INTERVAL_MS", "must be a number")?;
        loader.set_poll_interval(ms.map(Duration::from_millis));
    }
    if loader.poll_timeout().is_none() {
        let secs: Option<u64> = parse_env("NETSIFT_POLL_TIMEOUT_SECS", "must be a number")?;
        loader.set_poll_timeout(secs.map(Duration::from_secs));
    }
    if loader.firewall_index().is_none() {
        loader.set_firewall_index(env_var_or_none("NETSIFT_FIREWALL_INDEX"));
    }
    if loader.dhcp_index().is_none() {
        loader.set_dhcp_index(env_var_or_none("NETSIFT_DHCP_INDEX"));
    }
    if loader.windows_index().is_none() {
        loader.set_windows_index(env_var_or_none("NETSIFT_WINDOWS_INDEX"));
    }

    Ok(())
}
