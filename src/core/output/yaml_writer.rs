//! YAML output writer.

use std::io::Write;

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Nesting width `serde_yaml` always emits.
const NATIVE_INDENT: usize = 2;

/// Writes messages to `writer` as a YAML sequence of mappings.
///
/// Non-ASCII text is written as-is. Every nesting level is indented by
/// `config.indent` spaces; widths outside `2..=9` fall back to two.
///
/// # Format
/// ```yaml
/// - date: 2024-01-01 11:22:33
///   id: '10001'
///   name: Alice
///   content: Hello
/// ```
pub fn write_yaml<W: Write>(messages: &[Message], mut writer: W, config: &OutputConfig) -> Result<()> {
    let yaml = to_yaml(messages, config)?;
    writer.write_all(yaml.as_bytes())?;
    Ok(())
}

/// Converts messages to a YAML string.
///
/// Same format as [`write_yaml`].
pub fn to_yaml(messages: &[Message], config: &OutputConfig) -> Result<String> {
    let yaml = serde_yaml::to_string(messages)?;
    let width = if (2..=9).contains(&config.indent) {
        config.indent
    } else {
        NATIVE_INDENT
    };

    if width == NATIVE_INDENT {
        return Ok(yaml);
    }
    Ok(reindent(&yaml, width))
}

/// Re-indents a serialized record sequence.
///
/// Record keys sit at column 2 (the first one behind `- `) and any scalar
/// continuation or block body at column 4 or deeper.
fn reindent(yaml: &str, width: usize) -> String {
    let mut out = String::with_capacity(yaml.len() * 2);

    for line in yaml.split_inclusive('\n') {
        if let Some(rest) = line.strip_prefix("- ") {
            out.push('-');
            push_spaces(&mut out, width - 1);
            push_entry(&mut out, rest, width);
        } else if let Some(rest) = line.strip_prefix("    ") {
            push_spaces(&mut out, 2 * width);
            out.push_str(rest);
        } else if let Some(rest) = line.strip_prefix("  ") {
            push_spaces(&mut out, width);
            push_entry(&mut out, rest, width);
        } else {
            out.push_str(line);
        }
    }

    out
}

/// Writes a `key: value` line, rescaling a block scalar's explicit
/// indentation indicator (`|2-`) to the new width.
fn push_entry(out: &mut String, entry: &str, width: usize) {
    let Some((key, value)) = entry.split_once(": ") else {
        out.push_str(entry);
        return;
    };

    if value.starts_with(['|', '>']) {
        let digit = width.to_string();
        out.push_str(key);
        out.push_str(": ");
        out.push_str(&value.replace(|c: char| c.is_ascii_digit(), &digit));
    } else {
        out.push_str(entry);
    }
}

fn push_spaces(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n(' ', count));
}
