//! Everything that happens after parsing.
//!
//! This module contains:
//! - [`history`] - The parsed message list and its queries
//! - [`models`] - Output configuration
//! - [`filter`] - Message filtering by date and sender
//! - [`output`] - Format writers (JSON, YAML)

pub mod filter;
pub mod history;
pub mod models;
pub mod output;

pub use filter::{FilterConfig, apply_filters};
pub use history::ChatHistory;
pub use models::OutputConfig;

pub use crate::Message;

#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
#[cfg(feature = "yaml-output")]
pub use output::{to_yaml, write_yaml};
