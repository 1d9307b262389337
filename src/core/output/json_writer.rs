//! JSON output writer.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes messages to `writer` as a JSON array.
///
/// Non-ASCII text is written as-is. `config.indent == 0` gives a single
/// line; otherwise every nesting level is indented by that many spaces.
///
/// # Format
/// ```json
/// [
///   {
///     "date": "2024-01-01 11:22:33",
///     "id": "10001",
///     "name": "Alice",
///     "content": "Hello"
///   }
/// ]
/// ```
pub fn write_json<W: Write>(messages: &[Message], writer: W, config: &OutputConfig) -> Result<()> {
    if config.indent == 0 {
        serde_json::to_writer(writer, messages)?;
        return Ok(());
    }

    let indent = vec![b' '; config.indent];
    let mut ser = Serializer::with_formatter(writer, PrettyFormatter::with_indent(&indent));
    messages.serialize(&mut ser)?;
    Ok(())
}

/// Converts messages to a JSON string.
///
/// Same format as [`write_json`].
pub fn to_json(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let mut buf = Vec::new();
    write_json(messages, &mut buf, config)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Message> {
        vec![
            Message::new("1883-03-07 11:22:33", "123123", "(o´・ω・`)σ", "加个括号"),
            Message::new("1883-03-07 11:22:34", "456", "Bob", "a\nb"),
        ]
    }

    #[test]
    fn test_to_json_basic() {
        let json = to_json(&sample(), &OutputConfig::new()).unwrap();

        assert!(json.starts_with("[\n  {\n    \"date\""));
        assert!(json.contains(r#""name": "(o´・ω・`)σ""#));
        assert!(json.contains(r#""content": "加个括号""#));
        assert!(json.contains(r#""content": "a\nb""#));
    }

    #[test]
    fn test_to_json_custom_indent() {
        let json = to_json(&sample(), &OutputConfig::new().with_indent(4)).unwrap();
        assert!(json.starts_with("[\n    {\n        \"date\""));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), &OutputConfig::new().with_indent(0)).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.starts_with(r#"[{"date":"1883-03-07 11:22:33","id":"123123""#));
    }

    #[test]
    fn test_to_json_empty() {
        assert_eq!(to_json(&[], &OutputConfig::new()).unwrap(), "[]");
    }

    #[test]
    fn test_write_json_roundtrip() {
        let mut buf = Vec::new();
        write_json(&sample(), &mut buf, &OutputConfig::new()).unwrap();
        let back: Vec<Message> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(back, sample());
    }
}
