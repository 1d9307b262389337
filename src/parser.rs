//! Parser entry points for QQ chat exports.
//!
//! [`ChatParser`] turns an export (path, string, lines or stream) into a
//! [`ChatHistory`]. The header policy is selected with [`ParseMode`].
//!
//! # Example
//!
//! ```rust,no_run
//! use qq_chat_history::parser::ChatParser;
//! use std::path::Path;
//!
//! let parser = ChatParser::new();
//! let history = parser.parse(Path::new("chat_export.txt"))?;
//!
//! for msg in &history {
//!     println!("{} {}: {}", msg.date, msg.name, msg.content);
//! }
//! # Ok::<(), qq_chat_history::ChatHistoryError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ParserConfig;
use crate::core::ChatHistory;
use crate::error::{ChatHistoryError, Result};
use crate::parsing::{Messages, assemble_with, split_lines};

#[cfg(feature = "streaming")]
use crate::streaming::MessageStream;

/// Which header shapes the parser recognizes.
///
/// # Example
///
/// ```rust
/// use qq_chat_history::parser::ParseMode;
/// use std::str::FromStr;
///
/// assert_eq!(ParseMode::from_str("group").unwrap(), ParseMode::Group);
/// assert_eq!(ParseMode::default(), ParseMode::Auto);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Group headers when a trailing `(id)` / `<id>` is present, private
    /// headers otherwise.
    #[default]
    Auto,

    /// Only `name(id)` / `name<id>` headers.
    Group,

    /// Only bare `id` headers; brackets stay part of the identifier.
    Private,
}

impl ParseMode {
    /// Returns all available modes.
    pub fn all() -> &'static [ParseMode] {
        &[ParseMode::Auto, ParseMode::Group, ParseMode::Private]
    }
}

impl std::fmt::Display for ParseMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseMode::Auto => write!(f, "Auto"),
            ParseMode::Group => write!(f, "Group"),
            ParseMode::Private => write!(f, "Private"),
        }
    }
}

impl std::str::FromStr for ParseMode {
    type Err = ChatHistoryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ParseMode::Auto),
            "group" => Ok(ParseMode::Group),
            "private" => Ok(ParseMode::Private),
            _ => Err(ChatHistoryError::unknown_mode(s)),
        }
    }
}

/// Parser for QQ chat-history text exports.
///
/// The parser holds only configuration; every call starts from fresh state,
/// so one parser can be reused and shared between threads.
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParserConfig,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Creates a parser with the given header policy.
    pub fn with_mode(mode: ParseMode) -> Self {
        Self::with_config(ParserConfig::new().with_mode(mode))
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Returns a lazy iterator of messages over `lines`.
    ///
    /// Lines must not carry their terminators.
    pub fn messages<I>(&self, lines: I) -> Messages<I::IntoIter>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        assemble_with(lines, &self.config)
    }

    /// Parses already split lines.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qq_chat_history::parser::ChatParser;
    ///
    /// let history = ChatParser::new().parse_lines([
    ///     "2024-01-01 11:22:33 A<id1>",
    ///     "hello",
    /// ]);
    /// assert_eq!(history.len(), 1);
    /// ```
    pub fn parse_lines<I>(&self, lines: I) -> ChatHistory
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.messages(lines).collect()
    }

    /// Parses export content held in memory.
    pub fn parse_str(&self, content: &str) -> ChatHistory {
        self.parse_lines(split_lines(content))
    }

    /// Reads a whole export file as UTF-8 and parses it.
    ///
    /// # Errors
    ///
    /// Returns [`ChatHistoryError::Io`] if the file cannot be read or is not
    /// valid UTF-8.
    pub fn parse(&self, path: &Path) -> Result<ChatHistory> {
        let content = fs::read_to_string(path)?;
        let history = self.parse_str(&content);
        debug!(path = %path.display(), messages = history.len(), "parsed export");
        Ok(history)
    }

    /// Parses an export file (convenience method accepting &str path).
    pub fn parse_file(&self, path: &str) -> Result<ChatHistory> {
        self.parse(Path::new(path))
    }

    /// Opens an export file and streams its messages without loading the
    /// whole file.
    #[cfg(feature = "streaming")]
    pub fn stream(
        &self,
        path: &Path,
    ) -> Result<MessageStream<std::io::BufReader<fs::File>>> {
        MessageStream::open(path, &self.config)
    }
}
