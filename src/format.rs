//! Output format types.
//!
//! These types don't depend on CLI frameworks and can be used from any
//! library code.
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "json-output")]
//! # fn example() -> qq_chat_history::Result<()> {
//! use qq_chat_history::format::{OutputFormat, to_format_string};
//! use qq_chat_history::core::models::OutputConfig;
//! use qq_chat_history::Message;
//!
//! let messages = vec![Message::new("2024-01-01 11:22:33", "10001", "Alice", "Hello!")];
//!
//! let json = to_format_string(&messages, OutputFormat::Json, &OutputConfig::new())?;
//! assert!(json.starts_with('['));
//!
//! // Or pick the format from the file extension
//! let format = OutputFormat::from_path("history.yml")?;
//! assert_eq!(format, OutputFormat::Yaml);
//! # Ok(())
//! # }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::{ChatHistoryError, Result};

/// Output format for parsed histories.
///
/// # Example
///
/// ```rust
/// use qq_chat_history::format::OutputFormat;
/// use std::str::FromStr;
///
/// let format = OutputFormat::from_str("yml").unwrap();
/// assert_eq!(format, OutputFormat::Yaml);
/// assert_eq!(format.extension(), "yaml");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of messages (default)
    #[default]
    Json,

    /// YAML sequence of mappings
    #[cfg_attr(feature = "cli", value(alias = "yml"))]
    Yaml,
}

impl OutputFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// Returns all available formats.
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Json, OutputFormat::Yaml]
    }

    /// Returns `true` if `ext` (without dot, any case) names this format.
    pub fn accepts_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        match self {
            OutputFormat::Json => ext == "json",
            OutputFormat::Yaml => ext == "yaml" || ext == "yml",
        }
    }

    /// Detects format from a file path based on extension.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qq_chat_history::format::OutputFormat;
    ///
    /// assert_eq!(OutputFormat::from_path("out.JSON").unwrap(), OutputFormat::Json);
    /// assert!(OutputFormat::from_path("out.txt").is_err());
    /// ```
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        OutputFormat::all()
            .iter()
            .copied()
            .find(|format| format.accepts_extension(&ext))
            .ok_or_else(|| {
                ChatHistoryError::invalid_format(
                    "output",
                    format!("Unknown file extension: '.{ext}'. Expected one of: json, yaml, yml"),
                )
            })
    }

    #[allow(dead_code)]
    fn disabled(&self) -> ChatHistoryError {
        let feature = match self {
            OutputFormat::Json => "json-output",
            OutputFormat::Yaml => "yaml-output",
        };
        ChatHistoryError::invalid_format(
            "output",
            format!("Output format {self} requires the '{feature}' feature to be enabled"),
        )
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Yaml => write!(f, "YAML"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ChatHistoryError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            _ => Err(ChatHistoryError::unknown_format(s)),
        }
    }
}

/// Returns `path` with its extension replaced by the format's canonical
/// one, unless it already carries an extension the format accepts.
///
/// ```rust
/// use qq_chat_history::format::{OutputFormat, correct_extension};
/// use std::path::Path;
///
/// assert_eq!(
///     correct_extension(Path::new("out.json"), OutputFormat::Yaml),
///     Path::new("out.yaml"),
/// );
/// assert_eq!(
///     correct_extension(Path::new("out.yml"), OutputFormat::Yaml),
///     Path::new("out.yml"),
/// );
/// assert_eq!(
///     correct_extension(Path::new("out"), OutputFormat::Json),
///     Path::new("out.json"),
/// );
/// ```
pub fn correct_extension(path: &Path, format: OutputFormat) -> PathBuf {
    let keep = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| format.accepts_extension(ext));

    if keep {
        path.to_path_buf()
    } else {
        path.with_extension(format.extension())
    }
}

/// Writes messages to `writer` in the specified format.
///
/// # Errors
///
/// Returns an error if:
/// - The required feature for the format is not enabled
/// - Serialization or writing fails
#[allow(unused_variables)]
pub fn write_to_format<W: Write>(
    messages: &[Message],
    writer: W,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::write_json(messages, writer, config),
        #[cfg(feature = "yaml-output")]
        OutputFormat::Yaml => crate::core::output::write_yaml(messages, writer, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.disabled()),
    }
}

/// Writes messages into a newly created file at `path`.
pub fn write_to_path(
    messages: &[Message],
    path: &Path,
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_to_format(messages, &mut writer, format, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts messages to a string in the specified format.
#[allow(unused_variables)]
pub fn to_format_string(
    messages: &[Message],
    format: OutputFormat,
    config: &OutputConfig,
) -> Result<String> {
    match format {
        #[cfg(feature = "json-output")]
        OutputFormat::Json => crate::core::output::to_json(messages, config),
        #[cfg(feature = "yaml-output")]
        OutputFormat::Yaml => crate::core::output::to_yaml(messages, config),
        #[allow(unreachable_patterns)]
        _ => Err(format.disabled()),
    }
}
