//! Message header recognition.
//!
//! A QQ export opens every message with a header line:
//!
//! - group chat: `2024-01-01 11:22:33 Alice(10001)` or `... Alice<a@b.com>`
//! - private chat: `2024-01-01 11:22:33 Alice`
//!
//! [`recognize`] decides whether a line is a header and borrows the pieces
//! out of it. Anything else in the export is message content.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::ParseMode;

/// `YYYY-MM-DD H:MM:SS` or `YYYY-MM-DD HH:MM:SS` at line start, then whitespace.
static DATE_HEAD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{4}-[0-9]{2}-[0-9]{2}\s+[0-9]{1,2}:[0-9]{2}:[0-9]{2})\s+")
        .expect("date head pattern is valid")
});

/// Trailing `(...)` or `<...>` group anchored to line end. The interior may not
/// contain brackets, and the opening and closing kinds are not paired.
static TRAILING_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[(<]([^()<>]*?)[>)]$").expect("trailing id pattern is valid")
});

/// Syntactic shape of a recognized header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderShape {
    /// Display name followed by a bracketed identifier.
    Group,
    /// Bare identifier that doubles as the display name.
    Private,
}

/// A recognized header, borrowing from the line it was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderMatch<'a> {
    /// Timestamp token without surrounding whitespace.
    pub date: &'a str,
    /// Sender identifier.
    pub id: &'a str,
    /// Display name. Equals `id` for [`HeaderShape::Private`].
    pub name: &'a str,
    /// Which shape matched.
    pub shape: HeaderShape,
}

/// Recognizes a header line, detecting group and private shapes automatically.
///
/// # Example
///
/// ```rust
/// use qq_chat_history::parsing::header::{HeaderShape, recognize};
///
/// let head = recognize("2024-01-01 11:22:33 Alice<a@example.com>").unwrap();
/// assert_eq!(head.date, "2024-01-01 11:22:33");
/// assert_eq!(head.id, "a@example.com");
/// assert_eq!(head.name, "Alice");
/// assert_eq!(head.shape, HeaderShape::Group);
///
/// assert!(recognize("just some text").is_none());
/// ```
pub fn recognize(line: &str) -> Option<HeaderMatch<'_>> {
    recognize_with(line, ParseMode::Auto)
}

/// Recognizes a header line using an explicit header policy.
///
/// With [`ParseMode::Group`] only bracketed headers count; with
/// [`ParseMode::Private`] brackets are never split off the identifier.
pub fn recognize_with(line: &str, mode: ParseMode) -> Option<HeaderMatch<'_>> {
    let caps = DATE_HEAD.captures(line)?;
    let date = caps.get(1)?.as_str();
    let rest = &line[caps.get(0)?.end()..];

    match mode {
        ParseMode::Auto => group_shape(date, rest).or_else(|| private_shape(date, rest)),
        ParseMode::Group => group_shape(date, rest),
        ParseMode::Private => private_shape(date, rest),
    }
}

/// Returns `true` if `line` opens a new message under automatic detection.
pub fn is_header(line: &str) -> bool {
    recognize(line).is_some()
}

fn group_shape<'a>(date: &'a str, rest: &'a str) -> Option<HeaderMatch<'a>> {
    let caps = TRAILING_ID.captures(rest)?;
    let group = caps.get(0)?;

    Some(HeaderMatch {
        date,
        id: caps.get(1)?.as_str(),
        name: rest[..group.start()].trim(),
        shape: HeaderShape::Group,
    })
}

fn private_shape<'a>(date: &'a str, rest: &'a str) -> Option<HeaderMatch<'a>> {
    let id = rest.trim();
    if id.is_empty() {
        return None;
    }

    Some(HeaderMatch {
        date,
        id,
        name: id,
        shape: HeaderShape::Private,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(line: &str) -> (String, String, String) {
        let head = recognize(line).expect("header");
        assert_eq!(head.shape, HeaderShape::Group);
        (head.date.into(), head.id.into(), head.name.into())
    }

    #[test]
    fn test_group_angle_brackets() {
        assert_eq!(
            group("1883-03-07 11:22:33 A<someone@example.com>"),
            ("1883-03-07 11:22:33".into(), "someone@example.com".into(), "A".into())
        );
    }

    #[test]
    fn test_group_parentheses() {
        assert_eq!(
            group("1883-03-07 12:34:56 B(123123)"),
            ("1883-03-07 12:34:56".into(), "123123".into(), "B".into())
        );
    }

    #[test]
    fn test_group_name_with_brackets() {
        assert_eq!(group("1883-03-07 11:22:33 (A(123123)").2, "(A");
        assert_eq!(group("1883-03-07 22:00:51 (B)(456456)").2, "(B)");

        let (_, id, name) = group("1883-03-07 23:23:33 (o´・ω・`)σ<mail@someaddress.com>");
        assert_eq!(id, "mail@someaddress.com");
        assert_eq!(name, "(o´・ω・`)σ");
    }

    #[test]
    fn test_group_mismatched_brackets() {
        let (_, id, name) = group("2024-01-01 10:00:00 Carol(42>");
        assert_eq!(id, "42");
        assert_eq!(name, "Carol");
    }

    #[test]
    fn test_group_empty_name() {
        let (_, id, name) = group("2024-01-01 10:00:00 <10001>");
        assert_eq!(id, "10001");
        assert_eq!(name, "");
    }

    #[test]
    fn test_group_name_trimmed() {
        let (_, _, name) = group("2024-01-01 10:00:00 Alice   (10001)");
        assert_eq!(name, "Alice");
    }

    #[test]
    fn test_single_digit_hour() {
        let (date, _, _) = group("2024-01-01 9:05:00 Alice(10001)");
        assert_eq!(date, "2024-01-01 9:05:00");
    }

    #[test]
    fn test_private_shape() {
        let head = recognize("1883-03-07 12:34:56 B").unwrap();
        assert_eq!(head.shape, HeaderShape::Private);
        assert_eq!(head.id, "B");
        assert_eq!(head.name, "B");
    }

    #[test]
    fn test_private_shape_trims_trailing_whitespace() {
        let head = recognize("1883-03-07 12:34:56 Bob  ").unwrap();
        assert_eq!(head.id, "Bob");
    }

    #[test]
    fn test_trailing_text_after_bracket_is_private() {
        let head = recognize("2024-01-01 10:00:00 Alice(10001) ").unwrap();
        assert_eq!(head.shape, HeaderShape::Private);
        assert_eq!(head.id, "Alice(10001)");
    }

    #[test]
    fn test_nested_brackets_in_id_are_private() {
        let head = recognize("2024-01-01 10:00:00 Alice<x(y)>").unwrap();
        assert_eq!(head.shape, HeaderShape::Private);
        assert_eq!(head.id, "Alice<x(y)>");
    }

    #[test]
    fn test_bare_timestamp_is_not_header() {
        assert!(recognize("2006-01-02 15:04:05").is_none());
        assert!(recognize("2006-01-02 15:04:05   ").is_none());
    }

    #[test]
    fn test_timestamp_must_lead() {
        assert!(recognize(" 2024-01-01 10:00:00 Alice").is_none());
        assert!(recognize("said at 2024-01-01 10:00:00 Alice").is_none());
    }

    #[test]
    fn test_malformed_timestamps() {
        assert!(recognize("2024-1-01 10:00:00 Alice").is_none());
        assert!(recognize("2024-01-01 10:0:00 Alice").is_none());
        assert!(recognize("2024-01-01 100:00:00 Alice").is_none());
        assert!(recognize("2024-01-01T10:00:00 Alice").is_none());
    }

    #[test]
    fn test_group_mode_requires_brackets() {
        assert!(recognize_with("2024-01-01 10:00:00 Alice", ParseMode::Group).is_none());
        let head = recognize_with("2024-01-01 10:00:00 Alice(1)", ParseMode::Group).unwrap();
        assert_eq!(head.id, "1");
    }

    #[test]
    fn test_private_mode_keeps_brackets() {
        let head = recognize_with("2024-01-01 10:00:00 Alice(1)", ParseMode::Private).unwrap();
        assert_eq!(head.shape, HeaderShape::Private);
        assert_eq!(head.id, "Alice(1)");
        assert_eq!(head.name, "Alice(1)");
    }

    #[test]
    fn test_is_header() {
        assert!(is_header("2024-01-01 10:00:00 Alice"));
        assert!(!is_header(""));
        assert!(!is_header("========="));
    }
}
