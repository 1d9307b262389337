//! Parser configuration.
//!
//! # Example
//!
//! ```rust
//! use qq_chat_history::config::ParserConfig;
//! use qq_chat_history::parser::{ChatParser, ParseMode};
//!
//! let config = ParserConfig::new()
//!     .with_mode(ParseMode::Group)
//!     .with_buffer_size(128 * 1024);
//!
//! let parser = ChatParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

use crate::parser::ParseMode;

/// Configuration for parsing QQ chat exports.
///
/// The defaults recognize both group and private headers anywhere in the
/// file, which is what every export produced by the QQ desktop client needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Which header shapes are recognized (default: [`ParseMode::Auto`]).
    pub mode: ParseMode,

    /// Only recognize a header on the first line or right after an empty
    /// line (default: false).
    ///
    /// Some exports quote earlier messages verbatim, header included. With
    /// this enabled such quoted headers stay part of the content.
    pub header_after_blank_only: bool,

    /// Read buffer size for streaming (default: 64KB).
    pub buffer_size: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            mode: ParseMode::Auto,
            header_after_blank_only: false,
            buffer_size: 64 * 1024, // 64KB
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header policy.
    #[must_use]
    pub fn with_mode(mut self, mode: ParseMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables blank-line gating of headers.
    #[must_use]
    pub fn with_header_after_blank_only(mut self, enabled: bool) -> Self {
        self.header_after_blank_only = enabled;
        self
    }

    /// Sets the read buffer size for streaming.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }
}
