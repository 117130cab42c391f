//! Data models for Splunk API responses.
//!
//! This module provides types for deserializing Splunk REST API responses.
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod common;
pub mod jobs;
pub mod results;

pub use common::{MessageType, SplunkMessage, SplunkMessages};
pub use jobs::JobStatus;
pub use results::ResultRecord;
