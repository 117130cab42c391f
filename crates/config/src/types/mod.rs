//! Configuration type definitions for netsift.
//!
//! Responsibilities:
//! - Define connection, authentication, polling and index settings.
//! - Keep secrets wrapped in `secrecy::SecretString`.
//!
//! Does NOT handle:
//! - Loading values from the environment (see `loader` module).
//! - Network connections or authentication flows (see client crate).

mod auth;
mod connection;
mod search;

pub use auth::{AuthConfig, AuthStrategy};
pub use connection::{Config, ConnectionConfig};
pub use search::{PollConfig, SearchIndexes};
