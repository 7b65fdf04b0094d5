//! Message query functions

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::format::{body_preview, format_full_date, initials, shorten_address};
use crate::models::{Message, MessageId, PaymailAttachment};
use crate::storage::MessageStore;

/// Summary information for displaying a message in the inbox list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSummary {
    /// Message ID
    pub id: MessageId,
    /// Sender's .sol name
    pub from: String,
    /// Subject line
    pub subject: String,
    /// Single-line body preview
    pub preview: String,
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
    /// Whether the message has been opened
    pub is_read: bool,
    /// Whether a payment is attached
    pub has_payment: bool,
}

impl From<Message> for MessageSummary {
    fn from(message: Message) -> Self {
        Self {
            preview: body_preview(&message.body),
            has_payment: message.paymail.is_some(),
            id: message.id,
            from: message.from,
            subject: message.subject,
            timestamp: message.timestamp,
            is_read: message.is_read,
        }
    }
}

/// Everything the detail view renders for one message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageDetail {
    pub id: MessageId,
    pub subject: String,
    /// Sender's .sol name
    pub from: String,
    /// Sender address shortened to "first6...last4"
    pub from_short_address: String,
    /// Avatar text for the sender
    pub from_initials: String,
    /// Recipient's .sol name
    pub to: String,
    /// Full local timestamp
    pub full_date: String,
    /// Body text, verbatim
    pub body: String,
    pub paymail: Option<PaymailAttachment>,
}

impl From<Message> for MessageDetail {
    fn from(message: Message) -> Self {
        Self {
            from_short_address: shorten_address(&message.from_address, 6, 4),
            from_initials: initials(&message.from),
            full_date: format_full_date(message.timestamp),
            id: message.id,
            subject: message.subject,
            from: message.from,
            to: message.to,
            body: message.body,
            paymail: message.paymail,
        }
    }
}

/// List all messages for the inbox, in collection order
///
/// The collection is not re-sorted by timestamp.
pub fn list_messages(store: &dyn MessageStore) -> Result<Vec<MessageSummary>> {
    let messages = store.list_messages()?;
    Ok(messages.into_iter().map(MessageSummary::from).collect())
}

/// Get the detail view data for a message
pub fn get_message_detail(
    store: &dyn MessageStore,
    id: &MessageId,
) -> Result<Option<MessageDetail>> {
    Ok(store.get_message(id)?.map(MessageDetail::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::seeded_store;
    use crate::storage::InMemoryMessageStore;

    #[test]
    fn test_list_messages_keeps_collection_order() {
        let store = InMemoryMessageStore::new();
        // Oldest inserted first: listing must not re-sort by timestamp
        for (id, age) in [("old", 48), ("new", 1), ("mid", 24)] {
            let msg = Message::builder(id)
                .timestamp(Utc::now() - chrono::Duration::hours(age))
                .build();
            store.insert_message(msg).unwrap();
        }

        let summaries = list_messages(&store).unwrap();
        let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["old", "new", "mid"]);
    }

    #[test]
    fn test_summary_fields() {
        let store = seeded_store(Utc::now()).unwrap();
        let summaries = list_messages(&store).unwrap();

        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].from, "alice.sol");
        assert!(!summaries[0].is_read);
        assert!(summaries[0].preview.starts_with("Hey there!"));
        assert!(summaries[0].preview.ends_with("..."));
        assert!(summaries[2].has_payment);
    }

    #[test]
    fn test_get_message_detail() {
        let store = seeded_store(Utc::now()).unwrap();
        let detail = get_message_detail(&store, &MessageId::new("1"))
            .unwrap()
            .unwrap();

        assert_eq!(detail.subject, "Welcome to mcg.mail!");
        assert_eq!(detail.from_short_address, "7xKXtg...gAsU");
        assert_eq!(detail.from_initials, "AL");
        assert_eq!(detail.to, "yourname.sol");
        assert!(detail.body.contains('\n'));
    }

    #[test]
    fn test_get_message_detail_not_found() {
        let store = seeded_store(Utc::now()).unwrap();
        let detail = get_message_detail(&store, &MessageId::new("nonexistent")).unwrap();
        assert!(detail.is_none());
    }
}
