//! Filter messages by date range and sender.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering message collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Date from | [`with_date_from`](FilterConfig::with_date_from) | Messages on or after date |
//! | Date to | [`with_date_to`](FilterConfig::with_date_to) | Messages on or before date |
//! | Sender id | [`with_id`](FilterConfig::with_id) | Messages from one QQ number / e-mail |
//! | Display name | [`with_name`](FilterConfig::with_name) | Messages sent under one name |
//!
//! # Examples
//!
//! ```
//! use qq_chat_history::core::filter::{FilterConfig, apply_filters};
//! use qq_chat_history::Message;
//!
//! # fn main() -> qq_chat_history::Result<()> {
//! let messages = vec![
//!     Message::new("2024-01-01 12:00:00", "10001", "Alice", "Old"),
//!     Message::new("2024-06-15 12:00:00", "10001", "Alice", "New"),
//!     Message::new("2024-06-15 12:01:00", "10002", "Bob", "Hi"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_id("10001");
//!
//! let filtered = apply_filters(messages, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].content, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Messages whose header date cannot be read are **excluded** when date
//!   filters are active
//! - Id and name matching is exact
//! - Multiple filters are combined with AND logic

use chrono::{NaiveDate, NaiveDateTime};

use crate::Message;
use crate::error::{ChatHistoryError, Result};

/// Configuration for filtering messages by date and sender.
///
/// Filters are combined with AND logic: a message must match all active
/// filters to be included in the result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only messages on or after this timestamp.
    pub after: Option<NaiveDateTime>,

    /// Include only messages on or before this timestamp.
    pub before: Option<NaiveDateTime>,

    /// Include only messages from this sender id.
    pub id: Option<String>,

    /// Include only messages sent under this display name.
    pub name: Option<String>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatHistoryError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self> {
        self.after = Some(parse_date_at(date_str, 0, 0, 0)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// The whole day is included.
    ///
    /// # Errors
    ///
    /// Returns [`ChatHistoryError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self> {
        self.before = Some(parse_date_at(date_str, 23, 59, 59)?);
        Ok(self)
    }

    /// Sets the start timestamp directly.
    #[must_use]
    pub fn with_after(mut self, dt: NaiveDateTime) -> Self {
        self.after = Some(dt);
        self
    }

    /// Sets the end timestamp directly.
    #[must_use]
    pub fn with_before(mut self, dt: NaiveDateTime) -> Self {
        self.before = Some(dt);
        self
    }

    /// Sets the sender id filter.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the display name filter.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns `true` if any filter is active.
    pub fn is_active(&self) -> bool {
        self.has_date_filter() || self.id.is_some() || self.name.is_some()
    }

    /// Returns `true` if date filters are active.
    pub fn has_date_filter(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `msg` passes every active filter.
    pub fn matches(&self, msg: &Message) -> bool {
        if self.id.as_deref().is_some_and(|id| msg.id != id) {
            return false;
        }
        if self.name.as_deref().is_some_and(|name| msg.name != name) {
            return false;
        }

        if self.has_date_filter() {
            let Some(ts) = msg.timestamp() else {
                return false;
            };
            if self.after.is_some_and(|after| ts < after) {
                return false;
            }
            if self.before.is_some_and(|before| ts > before) {
                return false;
            }
        }

        true
    }
}

/// Parses `YYYY-MM-DD` and pins it to the given time of day.
fn parse_date_at(date_str: &str, hour: u32, min: u32, sec: u32) -> Result<NaiveDateTime> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(hour, min, sec))
        .ok_or_else(|| ChatHistoryError::invalid_date(date_str))
}

/// Filters a collection of messages based on the provided configuration.
///
/// Returns the input unchanged when no filter is active.
pub fn apply_filters(messages: Vec<Message>, config: &FilterConfig) -> Vec<Message> {
    if !config.is_active() {
        return messages;
    }

    messages
        .into_iter()
        .filter(|msg| config.matches(msg))
        .collect()
}
