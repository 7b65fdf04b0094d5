//! Storage trait definitions

use crate::models::{Message, MessageId};
use anyhow::Result;

/// Trait for message storage operations
///
/// Abstracts over storage backends. Listing preserves insertion order; the
/// only mutations after insertion are the one-way read and claimed flags.
pub trait MessageStore: Send + Sync {
    /// Insert a new message. Fails with `MailError::DuplicateMessage` if the ID exists.
    fn insert_message(&self, message: Message) -> Result<()>;

    /// Get a message by ID
    fn get_message(&self, id: &MessageId) -> Result<Option<Message>>;

    /// List all messages in insertion order
    fn list_messages(&self) -> Result<Vec<Message>>;

    /// Check if a message exists
    fn has_message(&self, id: &MessageId) -> Result<bool>;

    /// Mark a message as read.
    ///
    /// Returns true if the flag changed, false if it was already read.
    fn mark_read(&self, id: &MessageId) -> Result<bool>;

    /// Mark a message's payment attachment as claimed.
    ///
    /// Returns true if the flag changed, false if it was already claimed.
    fn mark_claimed(&self, id: &MessageId) -> Result<bool>;

    /// Count total messages
    fn count_messages(&self) -> Result<usize>;

    /// Count unread messages
    fn count_unread(&self) -> Result<usize>;

    /// Clear all data (for testing)
    fn clear(&self) -> Result<()>;
}
