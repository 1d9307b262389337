//! # qq-chat-history
//!
//! A Rust library for parsing QQ chat-history text exports into structured
//! messages and writing them out as JSON or YAML.
//!
//! ## Overview
//!
//! A QQ export is a plain text file. Every message starts with a header line
//! made of a timestamp and a sender, followed by the message body:
//!
//! ```text
//! 2024-01-01 11:22:33 Alice(10001)
//! hello
//!
//! 2024-01-01 11:23:00 Bob<bob@example.com>
//! hi there
//! ```
//!
//! Group exports put the sender id in `(...)` or `<...>` after the display
//! name; private exports carry a single identifier. Both shapes are
//! recognized by default. Anything before the first header (the export
//! banner) is skipped and blank lines inside a body are dropped.
//!
//! ## Quick Start
//!
//! ```rust
//! use qq_chat_history::parse_str;
//!
//! let history = parse_str(
//!     "2024-01-01 11:22:33 A<id1>\nhello\n2024-01-01 12:00:00 B(id2)\nworld",
//! );
//!
//! assert_eq!(history.len(), 2);
//! assert_eq!(history.messages()[0].id, "id1");
//! assert_eq!(history.messages()[1].content, "world");
//! ```
//!
//! ## Streaming for Large Files
//!
//! ```rust,no_run
//! use qq_chat_history::parser::ChatParser;
//! use std::path::Path;
//!
//! for result in ChatParser::new().stream(Path::new("huge_export.txt"))? {
//!     let msg = result?;
//!     println!("{}: {}", msg.name, msg.content);
//! }
//! # Ok::<(), qq_chat_history::ChatHistoryError>(())
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`] — [`ChatParser`] and [`ParseMode`]
//! - [`parsing`] — header recognition, message assembly, name registry
//! - [`config`] — [`ParserConfig`](config::ParserConfig)
//! - [`core`] — [`ChatHistory`] queries, filtering and output writers
//! - [`format`] — [`OutputFormat`](format::OutputFormat) and format dispatch
//! - [`streaming`] — [`MessageStream`](streaming::MessageStream) for large files
//! - [`error`] — Unified error types ([`ChatHistoryError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;
#[cfg(feature = "streaming")]
pub mod streaming;

use std::path::Path;

pub use crate::core::ChatHistory;
pub use error::{ChatHistoryError, Result};
pub use message::Message;
pub use parser::{ChatParser, ParseMode};

/// Parses export content held in memory with the default configuration.
pub fn parse_str(content: &str) -> ChatHistory {
    ChatParser::new().parse_str(content)
}

/// Parses already split lines with the default configuration.
pub fn parse_lines<I>(lines: I) -> ChatHistory
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    ChatParser::new().parse_lines(lines)
}

/// Reads and parses an export file with the default configuration.
///
/// # Errors
///
/// Returns [`ChatHistoryError::Io`] if the file cannot be read.
pub fn parse_path(path: impl AsRef<Path>) -> Result<ChatHistory> {
    ChatParser::new().parse(path.as_ref())
}

/// Convenient re-exports for common usage.
///
/// ```rust
/// use qq_chat_history::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Message;

    pub use crate::error::{ChatHistoryError, Result};

    pub use crate::config::ParserConfig;
    pub use crate::parser::{ChatParser, ParseMode};

    pub use crate::core::ChatHistory;
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::OutputConfig;

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};

    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, write_json};
    #[cfg(feature = "yaml-output")]
    pub use crate::core::output::{to_yaml, write_yaml};

    #[cfg(feature = "streaming")]
    pub use crate::streaming::MessageStream;
}
