//! The message record produced by the parser.
//!
//! A [`Message`] is a plain four-field record. Field order is the
//! serialization order: `date`, `id`, `name`, `content`.
//!
//! # Examples
//!
//! ```
//! use qq_chat_history::Message;
//!
//! let msg = Message::new("2024-01-01 11:22:33", "10001", "Alice", "Hello!");
//! assert_eq!(msg.id(), "10001");
//! assert_eq!(msg.name(), "Alice");
//!
//! let json = serde_json::to_string(&msg)?;
//! assert_eq!(
//!     json,
//!     r#"{"date":"2024-01-01 11:22:33","id":"10001","name":"Alice","content":"Hello!"}"#
//! );
//! # Ok::<(), serde_json::Error>(())
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Accepted layout of a header timestamp when it has to be compared.
const DATE_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// A single chat message.
///
/// | Field | Description |
/// |-------|-------------|
/// | `date` | Header timestamp, kept as the original text |
/// | `id` | Sender identifier (QQ number or e-mail in group exports) |
/// | `name` | Display name; equals `id` for private chats |
/// | `content` | Non-blank content lines joined with `\n` |
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Message {
    /// Timestamp from the header line, e.g. `2024-01-01 11:22:33`.
    ///
    /// Stored verbatim so the output reproduces the export exactly.
    pub date: String,

    /// Sender identifier.
    pub id: String,

    /// Sender display name at the time of this message.
    ///
    /// May be empty when a group header has nothing before the identifier.
    pub name: String,

    /// Message text. Blank lines of the export are not included.
    pub content: String,
}

impl Message {
    /// Creates a message from its four fields.
    pub fn new(
        date: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            id: id.into(),
            name: name.into(),
            content: content.into(),
        }
    }

    /// Returns the header timestamp as written in the export.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Returns the sender identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the sender display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the message content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Parses [`date`](Self::date) into a calendar value.
    ///
    /// Runs of whitespace between the date and the time are accepted, as is
    /// a single-digit hour. Returns `None` for anything else.
    ///
    /// ```
    /// use qq_chat_history::Message;
    ///
    /// let msg = Message::new("1883-03-07  9:05:00", "A", "A", "");
    /// let ts = msg.timestamp().unwrap();
    /// assert_eq!(ts.to_string(), "1883-03-07 09:05:00");
    /// ```
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let normalized = self.date.split_whitespace().collect::<Vec<_>>().join(" ");
        NaiveDateTime::parse_from_str(&normalized, DATE_LAYOUT).ok()
    }

    /// Returns `true` if the message carries no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
