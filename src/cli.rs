//! Command-line interface definition using clap.
//!
//! [`Args`] is the argument structure of the `qq-chat-history` binary. The
//! value enums it uses ([`OutputFormat`], [`ParseMode`]) are library types,
//! so nothing here is needed outside the binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::ParserConfig;
use crate::core::filter::FilterConfig;
use crate::error::Result;
use crate::format::OutputFormat;
use crate::parser::ParseMode;

/// Convert QQ chat-history text exports into JSON or YAML.
#[derive(Parser, Debug, Clone)]
#[command(name = "qq-chat-history")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    qq-chat-history 聊天记录.txt
    qq-chat-history group.txt -o history.yaml -f yaml
    qq-chat-history private.txt --mode private -d 4
    qq-chat-history group.txt --id 10001 --after 2024-01-01")]
pub struct Args {
    /// Path to the exported chat history
    pub input: PathBuf,

    /// Path to output file (extension is corrected to match the format)
    #[arg(short, long, default_value = "output.json")]
    pub output: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    /// Indentation of the output (0 gives compact JSON; YAML accepts 2-9)
    #[arg(short = 'd', long, default_value_t = 2)]
    pub indent: usize,

    /// Which header shapes to recognize
    #[arg(short, long, value_enum, default_value = "auto")]
    pub mode: ParseMode,

    /// Only treat a line as a header right after an empty line
    #[arg(long)]
    pub header_after_blank: bool,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from this sender id
    #[arg(long, value_name = "ID")]
    pub id: Option<String>,

    /// Keep messages sent under this display name
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Read the input line by line instead of loading it whole
    #[arg(long)]
    pub streaming: bool,
}

impl Args {
    /// Parser configuration selected by the flags.
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig::new()
            .with_mode(self.mode)
            .with_header_after_blank_only(self.header_after_blank)
    }

    /// Filter configuration selected by the flags.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChatHistoryError::InvalidDate`] for a malformed date.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut config = FilterConfig::new();
        if let Some(ref after) = self.after {
            config = config.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            config = config.with_date_to(before)?;
        }
        if let Some(ref id) = self.id {
            config = config.with_id(id.clone());
        }
        if let Some(ref name) = self.name {
            config = config.with_name(name.clone());
        }
        Ok(config)
    }
}
