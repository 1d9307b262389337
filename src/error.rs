//! Unified error types for qq-chat-history.
//!
//! Parsing itself never fails: a line that is not a message header is either
//! content or ignored. Errors only come from the boundaries, i.e. reading
//! the export, picking an output format, parsing filter dates and writing
//! the serialized result.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for qq-chat-history operations.
///
/// # Example
///
/// ```rust
/// use qq_chat_history::error::Result;
/// use qq_chat_history::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ChatHistoryError>;

/// The error type for all qq-chat-history operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatHistoryError {
    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The input file doesn't exist or is not valid UTF-8
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization error.
    #[cfg(feature = "yaml-output")]
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The requested output format is not one of the known names.
    #[error("Unknown format name '{name}'. Expected one of: json, yaml")]
    UnknownFormat {
        /// The name that was requested
        name: String,
    },

    /// The output format is known but cannot be used in this build.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// The format that was requested
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },

    /// The requested parse mode is not one of the known names.
    #[error("Unknown parse mode '{name}'. Expected one of: auto, group, private")]
    UnknownMode {
        /// The name that was requested
        name: String,
    },

    /// Invalid date format in filter configuration.
    #[error("Invalid date '{input}'. Expected format: {expected}")]
    InvalidDate {
        /// The invalid date string that was provided
        input: String,
        /// Expected format description
        expected: &'static str,
    },
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ChatHistoryError {
    /// Creates an unknown output format error.
    pub fn unknown_format(name: impl Into<String>) -> Self {
        ChatHistoryError::UnknownFormat { name: name.into() }
    }

    /// Creates an unknown parse mode error.
    pub fn unknown_mode(name: impl Into<String>) -> Self {
        ChatHistoryError::UnknownMode { name: name.into() }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        ChatHistoryError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Creates an invalid date error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        ChatHistoryError::InvalidDate {
            input: input.into(),
            expected: "YYYY-MM-DD",
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ChatHistoryError::Io(_))
    }

    /// Returns `true` if this is an unknown format error.
    pub fn is_unknown_format(&self) -> bool {
        matches!(self, ChatHistoryError::UnknownFormat { .. })
    }

    /// Returns `true` if this is a date-related error.
    pub fn is_invalid_date(&self) -> bool {
        matches!(self, ChatHistoryError::InvalidDate { .. })
    }
}
