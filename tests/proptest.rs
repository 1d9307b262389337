//! Property-based tests for qq-chat-history.
//!
//! These tests generate random exports to find edge cases.

use proptest::prelude::*;

use qq_chat_history::parsing::is_header;
use qq_chat_history::prelude::*;
use qq_chat_history::parse_lines;

/// A line that can never be a header: it does not start with a digit.
fn arb_content_line() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "Hello".to_string(),
        "你说得对".to_string(),
        "关注永雏塔菲喵".to_string(),
        "   ".to_string(),
        "(A)(123)".to_string(),
        "🎉🔥💀 emoji".to_string(),
        "x 2024-01-01 09:00:00 Y".to_string(),
        String::new(),
    ])
}

fn arb_header() -> impl Strategy<Value = (String, String, String)> {
    (
        prop::sample::select(vec!["Alice", "Bob", "村上", "(A)", "(B", ""]),
        prop::sample::select(vec!["10001", "10002", "a@example.com"]),
        0u32..24,
        0u32..60,
    )
        .prop_map(|(name, id, h, m)| {
            (
                format!("2024-01-01 {h:02}:{m:02}:00 {name}({id})"),
                id.to_string(),
                name.to_string(),
            )
        })
}

/// A message block: header plus body lines.
fn arb_block() -> impl Strategy<Value = ((String, String, String), Vec<String>)> {
    (arb_header(), prop::collection::vec(arb_content_line(), 0..6))
}

fn arb_message() -> impl Strategy<Value = Message> {
    (
        prop::sample::select(vec!["2024-01-01 09:00:00", "1883-03-07 11:22:33"]),
        prop::sample::select(vec!["10001", "a@example.com", "B"]),
        prop::sample::select(vec!["Alice", "村上", "(o´・ω・`)σ", ""]),
        prop::sample::select(vec!["hi", "a\nb", "\"quoted\"", "", "- not a list"]),
    )
        .prop_map(|(d, i, n, c)| Message::new(d, i, n, c))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // ASSEMBLY PROPERTIES
    // ============================================

    /// Input without headers produces no messages
    #[test]
    fn no_headers_no_messages(lines in prop::collection::vec(arb_content_line(), 0..30)) {
        prop_assert!(lines.iter().all(|l| !is_header(l)));
        prop_assert!(parse_lines(&lines).is_empty());
    }

    /// One message per header, in header order, with matching senders
    #[test]
    fn one_message_per_header(blocks in prop::collection::vec(arb_block(), 0..15)) {
        let mut lines = Vec::new();
        for ((header, _, _), body) in &blocks {
            lines.push(header.clone());
            lines.extend(body.iter().cloned());
        }

        let history = parse_lines(&lines);
        prop_assert_eq!(history.len(), blocks.len());

        for (msg, ((_, id, name), _)) in history.iter().zip(&blocks) {
            prop_assert_eq!(&msg.id, id);
            prop_assert_eq!(&msg.name, name);
        }
    }

    /// Content is the non-empty body lines joined with newlines
    #[test]
    fn content_drops_only_empty_lines(blocks in prop::collection::vec(arb_block(), 1..10)) {
        let mut lines = Vec::new();
        for ((header, _, _), body) in &blocks {
            lines.push(header.clone());
            lines.extend(body.iter().cloned());
        }

        let history = parse_lines(&lines);
        for (msg, (_, body)) in history.iter().zip(&blocks) {
            let expected: Vec<&str> = body
                .iter()
                .map(String::as_str)
                .filter(|l| !l.is_empty())
                .collect();
            prop_assert_eq!(msg.content.clone(), expected.join("\n"));
            prop_assert!(!msg.content.split('\n').any(str::is_empty) || msg.content.is_empty());
        }
    }

    /// Leading junk never changes the result
    #[test]
    fn leading_junk_is_ignored(
        junk in prop::collection::vec(arb_content_line(), 0..10),
        blocks in prop::collection::vec(arb_block(), 0..5),
    ) {
        let mut body = Vec::new();
        for ((header, _, _), content) in &blocks {
            body.push(header.clone());
            body.extend(content.iter().cloned());
        }
        let with_junk: Vec<String> = junk.iter().cloned().chain(body.iter().cloned()).collect();

        prop_assert_eq!(parse_lines(&with_junk), parse_lines(&body));
    }

    /// The latest name is the last name used in message order
    #[test]
    fn latest_name_is_last(blocks in prop::collection::vec(arb_block(), 1..10)) {
        let lines: Vec<String> = blocks.iter().map(|((h, _, _), _)| h.clone()).collect();
        let history = parse_lines(&lines);

        for ((_, id, _), _) in &blocks {
            let names = history.names_used_by(id);
            prop_assert_eq!(history.latest_name_used_by(id), names.last().copied());
        }
    }

    // ============================================
    // OUTPUT PROPERTIES
    // ============================================

    /// JSON encode then decode reproduces the records
    #[test]
    fn json_roundtrip(messages in prop::collection::vec(arb_message(), 0..10), indent in 0usize..5) {
        let json = to_json(&messages, &OutputConfig::new().with_indent(indent)).unwrap();
        let back: Vec<Message> = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, messages);
    }

    /// YAML encode then decode reproduces the records
    #[test]
    fn yaml_roundtrip(messages in prop::collection::vec(arb_message(), 0..10), indent in 2usize..10) {
        let yaml = to_yaml(&messages, &OutputConfig::new().with_indent(indent)).unwrap();
        let back: Vec<Message> = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(back, messages);
    }

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// Filter never increases message count
    #[test]
    fn filter_never_increases(messages in prop::collection::vec(arb_message(), 0..20)) {
        let len = messages.len();
        let config = FilterConfig::new().with_id("10001");
        prop_assert!(apply_filters(messages, &config).len() <= len);
    }

    /// Inactive filter is the identity
    #[test]
    fn inactive_filter_is_identity(messages in prop::collection::vec(arb_message(), 0..20)) {
        prop_assert_eq!(apply_filters(messages.clone(), &FilterConfig::new()), messages);
    }
}
