//! In-memory storage implementation
//!
//! Holds the seeded mock messages for the lifetime of the application.

use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::MessageStore;
use crate::error::MailError;
use crate::models::{Message, MessageId};

#[derive(Default)]
struct Inner {
    /// Messages in insertion order
    messages: Vec<Message>,
    /// Message ID -> position in `messages`
    index: HashMap<String, usize>,
}

impl Inner {
    fn get_mut(&mut self, id: &MessageId) -> Result<&mut Message> {
        let pos = *self
            .index
            .get(id.as_str())
            .ok_or_else(|| MailError::NotFound(id.to_string()))?;
        Ok(&mut self.messages[pos])
    }
}

/// In-memory implementation of MessageStore
///
/// A single RwLock guards both the ordered list and its ID index so they
/// never disagree.
pub struct InMemoryMessageStore {
    inner: RwLock<Inner>,
}

impl InMemoryMessageStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Create a store seeded with the given messages, in order
    pub fn with_messages(messages: impl IntoIterator<Item = Message>) -> Result<Self> {
        let store = Self::new();
        for message in messages {
            store.insert_message(message)?;
        }
        Ok(store)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>> {
        self.inner
            .read()
            .map_err(|_| anyhow!("message store lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>> {
        self.inner
            .write()
            .map_err(|_| anyhow!("message store lock poisoned"))
    }
}

impl Default for InMemoryMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore for InMemoryMessageStore {
    fn insert_message(&self, message: Message) -> Result<()> {
        let mut inner = self.write()?;
        let id = message.id.0.clone();
        if inner.index.contains_key(&id) {
            return Err(MailError::DuplicateMessage(id).into());
        }
        let pos = inner.messages.len();
        inner.messages.push(message);
        inner.index.insert(id, pos);
        Ok(())
    }

    fn get_message(&self, id: &MessageId) -> Result<Option<Message>> {
        let inner = self.read()?;
        Ok(inner
            .index
            .get(id.as_str())
            .map(|&pos| inner.messages[pos].clone()))
    }

    fn list_messages(&self) -> Result<Vec<Message>> {
        Ok(self.read()?.messages.clone())
    }

    fn has_message(&self, id: &MessageId) -> Result<bool> {
        Ok(self.read()?.index.contains_key(id.as_str()))
    }

    fn mark_read(&self, id: &MessageId) -> Result<bool> {
        let mut inner = self.write()?;
        let message = inner.get_mut(id)?;
        if message.is_read {
            return Ok(false);
        }
        message.is_read = true;
        Ok(true)
    }

    fn mark_claimed(&self, id: &MessageId) -> Result<bool> {
        let mut inner = self.write()?;
        let message = inner.get_mut(id)?;
        let paymail = message
            .paymail
            .as_mut()
            .ok_or_else(|| MailError::NoAttachment(id.to_string()))?;
        if paymail.claimed {
            return Ok(false);
        }
        paymail.claimed = true;
        Ok(true)
    }

    fn count_messages(&self) -> Result<usize> {
        Ok(self.read()?.messages.len())
    }

    fn count_unread(&self) -> Result<usize> {
        Ok(self.read()?.messages.iter().filter(|m| !m.is_read).count())
    }

    fn clear(&self) -> Result<()> {
        let mut inner = self.write()?;
        inner.messages.clear();
        inner.index.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PaymailAttachment;

    fn make_message(id: &str, is_read: bool) -> Message {
        Message::builder(id)
            .from("alice.sol", "7xKX")
            .subject(format!("Subject {}", id))
            .read(is_read)
            .build()
    }

    #[test]
    fn test_insert_and_get() {
        let store = InMemoryMessageStore::new();
        store.insert_message(make_message("m1", false)).unwrap();

        let msg = store.get_message(&MessageId::new("m1")).unwrap().unwrap();
        assert_eq!(msg.subject, "Subject m1");
        assert!(store.has_message(&MessageId::new("m1")).unwrap());
        assert!(store.get_message(&MessageId::new("missing")).unwrap().is_none());
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = InMemoryMessageStore::new();
        for id in ["m3", "m1", "m2"] {
            store.insert_message(make_message(id, true)).unwrap();
        }

        let ids: Vec<String> = store
            .list_messages()
            .unwrap()
            .into_iter()
            .map(|m| m.id.0)
            .collect();
        assert_eq!(ids, vec!["m3", "m1", "m2"]);
    }

    #[test]
    fn test_duplicate_rejected() {
        let store = InMemoryMessageStore::new();
        store.insert_message(make_message("m1", false)).unwrap();

        let err = store.insert_message(make_message("m1", true)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MailError>(),
            Some(MailError::DuplicateMessage(_))
        ));
        assert_eq!(store.count_messages().unwrap(), 1);
    }

    #[test]
    fn test_mark_read_is_one_way() {
        let store = InMemoryMessageStore::new();
        store.insert_message(make_message("m1", false)).unwrap();

        assert!(store.mark_read(&MessageId::new("m1")).unwrap());
        assert!(!store.mark_read(&MessageId::new("m1")).unwrap());
        assert_eq!(store.count_unread().unwrap(), 0);
    }

    #[test]
    fn test_mark_read_unknown_message() {
        let store = InMemoryMessageStore::new();
        let err = store.mark_read(&MessageId::new("nope")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MailError>(),
            Some(MailError::NotFound(_))
        ));
    }

    #[test]
    fn test_mark_claimed() {
        let store = InMemoryMessageStore::new();
        let paid = Message::builder("m1")
            .paymail(PaymailAttachment::new(10.0, "iUSD"))
            .build();
        store.insert_message(paid).unwrap();
        store.insert_message(make_message("m2", true)).unwrap();

        assert!(store.mark_claimed(&MessageId::new("m1")).unwrap());
        assert!(!store.mark_claimed(&MessageId::new("m1")).unwrap());

        let err = store.mark_claimed(&MessageId::new("m2")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MailError>(),
            Some(MailError::NoAttachment(_))
        ));
    }

    #[test]
    fn test_clear() {
        let store =
            InMemoryMessageStore::with_messages(vec![make_message("m1", false)]).unwrap();
        store.clear().unwrap();
        assert_eq!(store.count_messages().unwrap(), 0);
        assert!(!store.has_message(&MessageId::new("m1")).unwrap());
    }
}
