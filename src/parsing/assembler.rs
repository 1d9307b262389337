//! Line-to-message assembly.
//!
//! [`Assembler`] is the state machine: feed it lines one at a time and it
//! hands back a finished [`Message`] whenever a new header closes the
//! previous one. [`Messages`] drives an assembler over any line iterator,
//! lazily.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::Message;
use crate::config::ParserConfig;
use crate::parser::ParseMode;

use super::header::{self, HeaderMatch, HeaderShape};
use super::registry::NameRegistry;

/// Header fields captured while the content lines are still being collected.
#[derive(Debug)]
struct PendingHeader {
    date: String,
    id: String,
    name: String,
}

impl PendingHeader {
    fn into_message(self, content: String) -> Message {
        Message {
            date: self.date,
            id: self.id,
            name: self.name,
            content,
        }
    }
}

impl From<&HeaderMatch<'_>> for PendingHeader {
    fn from(head: &HeaderMatch<'_>) -> Self {
        Self {
            date: head.date.to_owned(),
            id: head.id.to_owned(),
            name: head.name.to_owned(),
        }
    }
}

/// Incremental message assembler.
///
/// Lines before the first header are dropped. After that, every header
/// closes the pending message and opens a new one, non-empty lines are
/// collected as content, and empty lines are skipped without closing
/// anything.
///
/// # Example
///
/// ```rust
/// use qq_chat_history::parsing::Assembler;
///
/// let mut assembler = Assembler::new();
/// assert!(assembler.feed("2024-01-01 09:00:00 Bob").is_none());
/// assert!(assembler.feed("hi").is_none());
///
/// let msg = assembler.feed("2024-01-01 09:01:00 Bob").unwrap();
/// assert_eq!(msg.content, "hi");
///
/// let last = assembler.finish().unwrap();
/// assert_eq!(last.content, "");
/// ```
#[derive(Debug)]
pub struct Assembler {
    mode: ParseMode,
    header_after_blank_only: bool,
    pending: Option<PendingHeader>,
    content: Vec<String>,
    registry: NameRegistry,
    previous_blank: bool,
    skipped: usize,
    emitted: usize,
}

impl Assembler {
    /// Creates an assembler with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&ParserConfig::default())
    }

    /// Creates an assembler honoring the header policy of `config`.
    pub fn with_config(config: &ParserConfig) -> Self {
        Self {
            mode: config.mode,
            header_after_blank_only: config.header_after_blank_only,
            pending: None,
            content: Vec::new(),
            registry: NameRegistry::new(),
            // The first line examined is always eligible as a header.
            previous_blank: true,
            skipped: 0,
            emitted: 0,
        }
    }

    /// Consumes one line, returning the message it completed, if any.
    ///
    /// `line` must not contain its line terminator.
    pub fn feed(&mut self, line: &str) -> Option<Message> {
        let eligible = !self.header_after_blank_only || self.previous_blank;
        self.previous_blank = line.is_empty();

        let head = if eligible {
            header::recognize_with(line, self.mode)
        } else {
            None
        };

        match head {
            Some(head) => self.open(&head),
            None if self.pending.is_none() => {
                self.skipped += 1;
                None
            }
            None => {
                if !line.is_empty() {
                    self.content.push(line.to_owned());
                }
                None
            }
        }
    }

    /// Signals end of input, returning the last pending message.
    pub fn finish(&mut self) -> Option<Message> {
        let last = self.close();
        debug!(
            messages = self.emitted,
            senders = self.registry.len(),
            "assembly finished"
        );
        last
    }

    /// Names recorded from group headers so far.
    pub fn registry(&self) -> &NameRegistry {
        &self.registry
    }

    /// Consumes the assembler, keeping only its name registry.
    pub fn into_registry(self) -> NameRegistry {
        self.registry
    }

    /// Number of lines dropped because no header had been seen yet.
    pub fn skipped_lines(&self) -> usize {
        self.skipped
    }

    /// Number of messages completed so far.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    fn open(&mut self, head: &HeaderMatch<'_>) -> Option<Message> {
        trace!(date = head.date, id = head.id, shape = ?head.shape, "header");

        if self.pending.is_none() && self.emitted == 0 && self.skipped > 0 {
            debug!(lines = self.skipped, "skipped lines before first header");
        }
        if head.shape == HeaderShape::Group {
            self.registry.record(head.id, head.name);
        }

        let finished = self.close();
        self.pending = Some(PendingHeader::from(head));
        finished
    }

    fn close(&mut self) -> Option<Message> {
        let pending = self.pending.take()?;
        let content = self.content.join("\n");
        self.content.clear();
        self.emitted += 1;
        Some(pending.into_message(content))
    }
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new()
    }
}

/// Lazy iterator of messages assembled from a line iterator.
///
/// Created by [`assemble`] and [`assemble_with`]. Each call to `next` pulls
/// lines until a message is complete; dropping the iterator early is fine.
#[derive(Debug)]
pub struct Messages<I> {
    lines: I,
    assembler: Assembler,
    done: bool,
}

impl<I> Messages<I> {
    /// Names recorded from group headers consumed so far.
    pub fn registry(&self) -> &NameRegistry {
        self.assembler.registry()
    }

    /// Consumes the iterator, keeping only its name registry.
    pub fn into_registry(self) -> NameRegistry {
        self.assembler.into_registry()
    }
}

impl<I, S> Iterator for Messages<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Message;

    fn next(&mut self) -> Option<Message> {
        if self.done {
            return None;
        }

        for line in self.lines.by_ref() {
            if let Some(msg) = self.assembler.feed(line.as_ref()) {
                return Some(msg);
            }
        }

        self.done = true;
        self.assembler.finish()
    }
}

impl<I, S> FusedIterator for Messages<I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
}

/// Assembles messages from lines with automatic header detection.
///
/// # Example
///
/// ```rust
/// use qq_chat_history::parsing::assemble;
///
/// let lines = ["garbage line", "2024-01-01 09:00:00 X", "content"];
/// let messages: Vec<_> = assemble(lines).collect();
///
/// assert_eq!(messages.len(), 1);
/// assert_eq!(messages[0].id, "X");
/// assert_eq!(messages[0].content, "content");
/// ```
pub fn assemble<I>(lines: I) -> Messages<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    assemble_with(lines, &ParserConfig::default())
}

/// Assembles messages from lines using the header policy of `config`.
pub fn assemble_with<I>(lines: I, config: &ParserConfig) -> Messages<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    Messages {
        lines: lines.into_iter(),
        assembler: Assembler::with_config(config),
        done: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(lines: &[&str]) -> Vec<Message> {
        assemble(lines.iter().copied()).collect()
    }

    #[test]
    fn test_group_headers() {
        let messages = collect(&[
            "2024-01-01 11:22:33 A<id1>",
            "hello",
            "2024-01-01 12:00:00 B(id2)",
            "world",
        ]);

        assert_eq!(
            messages,
            vec![
                Message::new("2024-01-01 11:22:33", "id1", "A", "hello"),
                Message::new("2024-01-01 12:00:00", "id2", "B", "world"),
            ]
        );
    }

    #[test]
    fn test_private_blank_line_is_not_separator() {
        let messages = collect(&["2024-01-01 09:00:00 Bob", "hi", "", "there"]);
        assert_eq!(
            messages,
            vec![Message::new("2024-01-01 09:00:00", "Bob", "Bob", "hi\nthere")]
        );
    }

    #[test]
    fn test_leading_junk_skipped() {
        let messages = collect(&["garbage line", "2024-01-01 09:00:00 X", "content"]);
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].id, "X");
        assert_eq!(messages[0].content, "content");
    }

    #[test]
    fn test_no_header_yields_nothing() {
        assert!(collect(&["===", "not a header", "", "still not"]).is_empty());
        assert!(collect(&[]).is_empty());
    }

    #[test]
    fn test_consecutive_headers_have_empty_content() {
        let messages = collect(&["2024-01-01 09:00:00 A", "2024-01-01 09:00:01 B"]);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "");
        assert_eq!(messages[1].content, "");
    }

    #[test]
    fn test_whitespace_only_line_is_content() {
        let messages = collect(&["2024-01-01 09:00:00 A", "   ", "x"]);
        assert_eq!(messages[0].content, "   \nx");
    }

    #[test]
    fn test_bare_timestamp_is_content() {
        let messages = collect(&[
            "1883-03-07 11:22:33 A",
            "1883-03-07 11:22:33",
            "",
            "1883-03-07 22:00:51 B",
        ]);
        assert_eq!(messages[0].content, "1883-03-07 11:22:33");
        assert_eq!(messages[1].id, "B");
    }

    #[test]
    fn test_registry_tracks_latest_group_name() {
        let mut iter = assemble([
            "2024-01-01 09:00:00 A(1)",
            "2024-01-01 09:00:01 B(1)",
            "2024-01-01 09:00:02 Solo",
        ]);
        let messages: Vec<_> = iter.by_ref().collect();

        assert_eq!(messages.len(), 3);
        assert_eq!(iter.registry().latest("1"), Some("B"));
        assert!(!iter.registry().contains("Solo"));
    }

    #[test]
    fn test_lazy_iteration() {
        let mut iter = assemble([
            "2024-01-01 09:00:00 A",
            "one",
            "2024-01-01 09:00:01 B",
            "two",
        ]);

        assert_eq!(iter.next().unwrap().content, "one");
        assert_eq!(iter.next().unwrap().content, "two");
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_owned_lines() {
        let lines = vec!["2024-01-01 09:00:00 A".to_string(), "x".to_string()];
        let messages: Vec<_> = assemble(lines).collect();
        assert_eq!(messages[0].content, "x");
    }

    #[test]
    fn test_group_mode_treats_private_headers_as_content() {
        let config = ParserConfig::new().with_mode(ParseMode::Group);
        let messages: Vec<_> = assemble_with(
            ["2024-01-01 09:00:00 A(1)", "2024-01-01 09:00:01 Bob", "x"],
            &config,
        )
        .collect();

        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].content, "2024-01-01 09:00:01 Bob\nx");
    }

    #[test]
    fn test_header_after_blank_only() {
        let config = ParserConfig::new().with_header_after_blank_only(true);
        let messages: Vec<_> = assemble_with(
            [
                "2024-01-01 09:00:00 A",
                "2024-01-01 09:00:01 quoted",
                "",
                "2024-01-01 09:00:02 B",
                "y",
            ],
            &config,
        )
        .collect();

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].content, "2024-01-01 09:00:01 quoted");
        assert_eq!(messages[1].id, "B");
    }

    #[test]
    fn test_feed_and_finish_counters() {
        let mut assembler = Assembler::new();
        assert!(assembler.feed("header junk").is_none());
        assert!(assembler.feed("2024-01-01 09:00:00 A").is_none());
        assert!(assembler.feed("2024-01-01 09:00:01 B").is_some());
        assert!(assembler.finish().is_some());
        assert!(assembler.finish().is_none());

        assert_eq!(assembler.skipped_lines(), 1);
        assert_eq!(assembler.emitted(), 2);
    }
}
