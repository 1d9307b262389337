//! Latest display name per sender identifier.

use std::collections::HashMap;

/// Records the most recently seen display name for each identifier.
///
/// Filled while assembling group chats, where every header carries the
/// sender's current group nickname. Private headers carry no separate name
/// and never touch the registry.
///
/// # Example
///
/// ```rust
/// use qq_chat_history::parsing::NameRegistry;
///
/// let mut registry = NameRegistry::new();
/// registry.record("10001", "Alice");
/// registry.record("10001", "Alice (away)");
///
/// assert_eq!(registry.latest("10001"), Some("Alice (away)"));
/// assert_eq!(registry.latest("10002"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRegistry {
    names: HashMap<String, String>,
}

impl NameRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `name` as the latest name for `id`, returning the previous one.
    pub fn record(&mut self, id: &str, name: &str) -> Option<String> {
        if let Some(slot) = self.names.get_mut(id) {
            return Some(std::mem::replace(slot, name.to_owned()));
        }
        self.names.insert(id.to_owned(), name.to_owned());
        None
    }

    /// Returns the latest name recorded for `id`.
    pub fn latest(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Returns `true` if `id` has been seen.
    pub fn contains(&self, id: &str) -> bool {
        self.names.contains_key(id)
    }

    /// Number of distinct identifiers seen.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over `(id, latest name)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(id, name)| (id.as_str(), name.as_str()))
    }
}
