//! A parsed chat history and its queries.
//!
//! [`ChatHistory`] owns the finished message list in export order. All
//! queries are linear scans over that list; nothing is cached, so results
//! are always consistent with the (immutable) messages.
//!
//! # Example
//!
//! ```rust
//! use qq_chat_history::parse_str;
//!
//! let history = parse_str(
//!     "2024-01-01 09:00:00 A(1)\nhi\n\
//!      2024-01-01 09:01:00 B(1)\nrenamed\n\
//!      2024-01-01 09:02:00 C(1)\nagain",
//! );
//!
//! assert_eq!(history.names_used_by("1"), vec!["A", "B", "C"]);
//! assert_eq!(history.latest_name_used_by("1"), Some("C"));
//! assert_eq!(history.first_message_by_name("B").unwrap().content, "renamed");
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Message;
use crate::core::models::OutputConfig;
use crate::error::Result;
use crate::format::{OutputFormat, write_to_format};

/// Messages parsed from one export, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatHistory {
    messages: Vec<Message>,
}

impl ChatHistory {
    /// Wraps an already assembled message list.
    pub fn new(messages: Vec<Message>) -> Self {
        Self { messages }
    }

    /// Number of messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Iterates over the messages in export order.
    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    /// Returns the messages as a slice.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Consumes the history, returning the message list.
    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// All display names used by `id`, in message order, duplicates kept.
    pub fn names_used_by(&self, id: &str) -> Vec<&str> {
        self.messages
            .iter()
            .filter(|msg| msg.id == id)
            .map(|msg| msg.name.as_str())
            .collect()
    }

    /// The display name `id` used in its last message.
    pub fn latest_name_used_by(&self, id: &str) -> Option<&str> {
        self.messages
            .iter()
            .rev()
            .find(|msg| msg.id == id)
            .map(|msg| msg.name.as_str())
    }

    /// All messages sent by `id`.
    pub fn messages_by_id(&self, id: &str) -> Vec<&Message> {
        self.messages.iter().filter(|msg| msg.id == id).collect()
    }

    /// All messages sent under the display name `name`.
    pub fn messages_by_name(&self, name: &str) -> Vec<&Message> {
        self.messages.iter().filter(|msg| msg.name == name).collect()
    }

    /// The first message sent by `id`.
    pub fn first_message_by_id(&self, id: &str) -> Option<&Message> {
        self.messages.iter().find(|msg| msg.id == id)
    }

    /// The first message sent under the display name `name`.
    pub fn first_message_by_name(&self, name: &str) -> Option<&Message> {
        self.messages.iter().find(|msg| msg.name == name)
    }

    /// Distinct sender identifiers in order of first appearance.
    pub fn ids(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.messages
            .iter()
            .map(|msg| msg.id.as_str())
            .filter(|id| seen.insert(*id))
            .collect()
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Serializes the messages to `writer`.
    ///
    /// # Errors
    ///
    /// Fails if the format's feature is disabled or writing fails.
    pub fn save<W: Write>(&self, writer: W, format: OutputFormat, indent: usize) -> Result<()> {
        write_to_format(
            &self.messages,
            writer,
            format,
            &OutputConfig::new().with_indent(indent),
        )
    }

    /// Serializes the messages into a newly created file at `path`.
    pub fn save_to_path(&self, path: &Path, format: OutputFormat, indent: usize) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.save(&mut writer, format, indent)?;
        writer.flush()?;
        Ok(())
    }
}

impl From<Vec<Message>> for ChatHistory {
    fn from(messages: Vec<Message>) -> Self {
        Self::new(messages)
    }
}

impl FromIterator<Message> for ChatHistory {
    fn from_iter<T: IntoIterator<Item = Message>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl IntoIterator for ChatHistory {
    type Item = Message;
    type IntoIter = std::vec::IntoIter<Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.into_iter()
    }
}

impl<'a> IntoIterator for &'a ChatHistory {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
