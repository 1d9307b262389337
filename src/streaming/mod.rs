//! Streaming parser for large chat exports.
//!
//! [`MessageStream`] reads an export line by line and yields each message
//! as soon as the next header closes it, so memory use stays bounded by
//! the largest single message rather than the file size.
//!
//! # Example
//!
//! ```rust,no_run
//! use qq_chat_history::streaming::MessageStream;
//! use qq_chat_history::config::ParserConfig;
//! use std::path::Path;
//!
//! let mut stream = MessageStream::open(Path::new("large_export.txt"), &ParserConfig::new())?;
//!
//! while let Some(result) = stream.next() {
//!     let msg = result?;
//!     println!("{}: {}", msg.name, msg.content);
//!
//!     if let Some(pct) = stream.progress() {
//!         eprint!("\r{pct:.1}%");
//!     }
//! }
//! # Ok::<(), qq_chat_history::ChatHistoryError>(())
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::iter::FusedIterator;
use std::path::Path;

use tracing::{debug, warn};

use crate::Message;
use crate::config::ParserConfig;
use crate::error::Result;
use crate::parsing::{Assembler, NameRegistry, strip_terminator};

/// Iterator over messages read from a [`BufRead`] source.
///
/// Line terminators (`\n` and `\r\n`) are stripped before lines reach the
/// assembler. A read error (including invalid UTF-8) is yielded once and
/// ends the stream.
pub struct MessageStream<R: BufRead> {
    reader: R,
    assembler: Assembler,
    line_buffer: String,
    bytes_read: u64,
    total_bytes: Option<u64>,
    finished: bool,
}

impl MessageStream<BufReader<File>> {
    /// Opens `path` with a buffer of `config.buffer_size` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ChatHistoryError::Io`] if the file cannot be opened.
    pub fn open(path: &Path, config: &ParserConfig) -> Result<Self> {
        let file = File::open(path)?;
        let file_size = file.metadata()?.len();
        debug!(path = %path.display(), bytes = file_size, "streaming export");

        let reader = BufReader::with_capacity(config.buffer_size, file);
        let mut stream = Self::new(reader, config);
        stream.total_bytes = Some(file_size);
        Ok(stream)
    }
}

impl<R: BufRead> MessageStream<R> {
    /// Wraps an already buffered reader. The total size is unknown.
    pub fn new(reader: R, config: &ParserConfig) -> Self {
        Self {
            reader,
            assembler: Assembler::with_config(config),
            line_buffer: String::with_capacity(4096),
            bytes_read: 0,
            total_bytes: None,
            finished: false,
        }
    }

    /// Sets the expected total size, enabling [`progress`](Self::progress).
    #[must_use]
    pub fn with_total_bytes(mut self, total: u64) -> Self {
        self.total_bytes = Some(total);
        self
    }

    /// Returns approximate progress as a percentage (0.0 to 100.0).
    ///
    /// Returns `None` if the total size is unknown or zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> Option<f64> {
        match self.total_bytes {
            Some(total) if total > 0 => Some((self.bytes_read as f64 / total as f64) * 100.0),
            _ => None,
        }
    }

    /// Returns the number of bytes consumed so far.
    pub fn bytes_processed(&self) -> u64 {
        self.bytes_read
    }

    /// Returns the total input size in bytes, if known.
    pub fn total_bytes(&self) -> Option<u64> {
        self.total_bytes
    }

    /// The latest display name of every group member seen so far.
    pub fn registry(&self) -> &NameRegistry {
        self.assembler.registry()
    }

    /// Reads the next raw line into `line_buffer`. Returns `false` at EOF.
    fn fill_line(&mut self) -> std::io::Result<bool> {
        self.line_buffer.clear();
        let bytes = self.reader.read_line(&mut self.line_buffer)?;
        self.bytes_read += bytes as u64;
        Ok(bytes > 0)
    }
}

impl<R: BufRead> Iterator for MessageStream<R> {
    type Item = Result<Message>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.fill_line() {
                Ok(true) => {
                    let line = strip_terminator(&self.line_buffer);
                    if let Some(msg) = self.assembler.feed(line) {
                        return Some(Ok(msg));
                    }
                }
                Ok(false) => {
                    self.finished = true;
                    return self.assembler.finish().map(Ok);
                }
                Err(e) => {
                    warn!(bytes_read = self.bytes_read, error = %e, "stream aborted");
                    self.finished = true;
                    return Some(Err(e.into()));
                }
            }
        }
    }
}

impl<R: BufRead> FusedIterator for MessageStream<R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    use crate::parser::ParseMode;

    const SAMPLE: &str = "QQ header junk\n\
        \n\
        2024-01-01 09:00:00 Alice(10001)\r\n\
        hello\r\n\
        \r\n\
        world\n\
        2024-01-01 09:01:00 Bob<bob@example.com>\n\
        hi";

    fn stream(text: &str) -> MessageStream<Cursor<Vec<u8>>> {
        MessageStream::new(Cursor::new(text.as_bytes().to_vec()), &ParserConfig::new())
            .with_total_bytes(text.len() as u64)
    }

    #[test]
    fn test_stream_matches_in_memory_parse() {
        let streamed: Vec<Message> = stream(SAMPLE).collect::<Result<_>>().unwrap();
        let parsed = crate::parse_str(SAMPLE).into_messages();
        assert_eq!(streamed, parsed);

        assert_eq!(streamed.len(), 2);
        assert_eq!(streamed[0].content, "hello\nworld");
        assert_eq!(streamed[1].id, "bob@example.com");
    }

    #[test]
    fn test_progress_reaches_100() {
        let mut iter = stream(SAMPLE);
        assert_eq!(iter.progress(), Some(0.0));
        let _: Vec<_> = iter.by_ref().collect();
        assert_eq!(iter.bytes_processed(), SAMPLE.len() as u64);
        assert!((iter.progress().unwrap() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_unknown_total() {
        let iter = MessageStream::new(Cursor::new(Vec::new()), &ParserConfig::new());
        assert!(iter.progress().is_none());
        assert!(iter.total_bytes().is_none());
    }

    #[test]
    fn test_registry_tracks_renames() {
        let text = "2024-01-01 09:00:00 A(1)\nx\n2024-01-01 09:00:01 B(1)\ny";
        let mut iter = stream(text);
        let _: Vec<_> = iter.by_ref().collect();
        assert_eq!(iter.registry().latest("1"), Some("B"));
    }

    #[test]
    fn test_invalid_utf8_yields_error_then_ends() {
        let mut bytes = b"2024-01-01 09:00:00 A(1)\nok\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        let mut iter = MessageStream::new(Cursor::new(bytes), &ParserConfig::new());

        let first = iter.next().unwrap();
        assert!(first.unwrap_err().is_io());
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_private_mode() {
        let text = "2024-01-01 09:00:00 Alice(1)\nhi";
        let config = ParserConfig::new().with_mode(ParseMode::Private);
        let msgs: Vec<Message> = MessageStream::new(Cursor::new(text.as_bytes()), &config)
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(msgs[0].id, "Alice(1)");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(stream("").count(), 0);
    }
}
