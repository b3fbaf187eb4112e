//! Conversation history management
//!
//! The log is append-only: records are created by user submission, fallback
//! replies, executed-tool results, or cancellation notices, and are never
//! edited or deleted individually. `clear` resets the whole log.

use chrono::{DateTime, Utc};

pub use crate::types::{Message, Role};

/// Conversation history
#[derive(Debug, Clone)]
pub struct Conversation {
    /// Unique conversation ID
    pub id: String,
    /// All messages in the conversation
    messages: Vec<Message>,
    /// When the conversation was created
    pub created_at: DateTime<Utc>,
    /// When the conversation was last updated
    pub updated_at: DateTime<Utc>,
}

impl Conversation {
    /// Create a new empty conversation
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Append a message to the conversation
    pub fn add_message(&mut self, role: Role, content: impl Into<String>) {
        let now = Utc::now();
        self.messages.push(Message {
            role,
            content: content.into(),
            timestamp: now,
        });
        self.updated_at = now;
    }

    /// All messages, oldest first
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent message, if any
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Get the last N messages for context
    pub fn last_n_messages(&self, n: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(n);
        &self.messages[start..]
    }

    /// Clear all messages (keeps the same ID)
    pub fn clear(&mut self) {
        self.messages.clear();
        self.updated_at = Utc::now();
    }

    /// Check if the conversation is empty
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Get the message count
    pub fn len(&self) -> usize {
        self.messages.len()
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_preserves_order() {
        let mut conv = Conversation::new();
        conv.add_message(Role::User, "first");
        conv.add_message(Role::Assistant, "second");
        conv.add_message(Role::User, "third");

        let contents: Vec<&str> = conv.messages().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
    }

    #[test]
    fn clear_keeps_id() {
        let mut conv = Conversation::new();
        let id = conv.id.clone();
        conv.add_message(Role::User, "hello");
        conv.clear();

        assert!(conv.is_empty());
        assert_eq!(conv.id, id);
    }
}
