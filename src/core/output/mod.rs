//! Output format writers.
//!
//! - [`write_json`] / [`to_json`] - JSON array of messages - requires `json-output` feature
//! - [`write_yaml`] / [`to_yaml`] - YAML sequence of mappings - requires `yaml-output` feature
//!
//! Both keep the message field order (`date`, `id`, `name`, `content`) and
//! write non-ASCII text unescaped.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(all(feature = "json-output", feature = "yaml-output"))]
//! # fn main() -> qq_chat_history::Result<()> {
//! use qq_chat_history::core::output::{to_json, to_yaml};
//! use qq_chat_history::core::models::OutputConfig;
//! use qq_chat_history::Message;
//!
//! let messages = vec![Message::new("2024-01-01 11:22:33", "10001", "Alice", "你好")];
//!
//! let json = to_json(&messages, &OutputConfig::new())?;
//! assert!(json.contains("你好"));
//!
//! let yaml = to_yaml(&messages, &OutputConfig::new().with_indent(4))?;
//! assert!(yaml.starts_with("-   date:"));
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "json-output", feature = "yaml-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "yaml-output")]
mod yaml_writer;

#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "yaml-output")]
pub use yaml_writer::{to_yaml, write_yaml};
