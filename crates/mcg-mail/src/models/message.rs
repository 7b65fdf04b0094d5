//! Message model representing a single on-chain mail message

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a message
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Payment metadata attached to a message
///
/// No transfer logic exists; `claimed` only ever moves from false to true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymailAttachment {
    /// Amount attached (non-negative)
    pub amount: f64,
    /// Short currency code (e.g., "iUSD", "SOL")
    pub currency: String,
    /// Whether the recipient has claimed the payment
    pub claimed: bool,
}

impl PaymailAttachment {
    /// Create an unclaimed attachment. Negative amounts are clamped to zero.
    pub fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.max(0.0),
            currency: currency.into(),
            claimed: false,
        }
    }

    /// Format the amount and currency for display (e.g., "10 iUSD", "10.5 iUSD")
    pub fn display(&self) -> String {
        format!("{} {}", self.amount, self.currency)
    }
}

/// A single mail message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message ID (unique within the collection)
    pub id: MessageId,
    /// Sender's .sol name
    pub from: String,
    /// Sender's on-chain address
    pub from_address: String,
    /// Recipient's .sol name
    pub to: String,
    /// Recipient's on-chain address
    pub to_address: String,
    /// Subject line
    pub subject: String,
    /// Plain text body
    pub body: String,
    /// When the message was sent
    pub timestamp: DateTime<Utc>,
    /// Whether the message has been opened
    pub is_read: bool,
    /// Optional payment attachment
    pub paymail: Option<PaymailAttachment>,
}

impl Message {
    /// Create a new message builder
    pub fn builder(id: impl Into<MessageId>) -> MessageBuilder {
        MessageBuilder::new(id.into())
    }

    /// Whether the message carries a payment that has not been claimed yet
    pub fn has_unclaimed_payment(&self) -> bool {
        self.paymail.as_ref().is_some_and(|p| !p.claimed)
    }
}

/// Builder for creating Message instances
pub struct MessageBuilder {
    id: MessageId,
    from: String,
    from_address: String,
    to: String,
    to_address: String,
    subject: String,
    body: String,
    timestamp: Option<DateTime<Utc>>,
    is_read: bool,
    paymail: Option<PaymailAttachment>,
}

impl MessageBuilder {
    fn new(id: MessageId) -> Self {
        Self {
            id,
            from: String::new(),
            from_address: String::new(),
            to: String::new(),
            to_address: String::new(),
            subject: String::new(),
            body: String::new(),
            timestamp: None,
            is_read: false,
            paymail: None,
        }
    }

    /// Set the sender name and address
    pub fn from(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.from = name.into();
        self.from_address = address.into();
        self
    }

    /// Set the recipient name and address
    pub fn to(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.to = name.into();
        self.to_address = address.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn read(mut self, is_read: bool) -> Self {
        self.is_read = is_read;
        self
    }

    pub fn paymail(mut self, paymail: PaymailAttachment) -> Self {
        self.paymail = Some(paymail);
        self
    }

    pub fn build(self) -> Message {
        Message {
            id: self.id,
            from: self.from,
            from_address: self.from_address,
            to: self.to,
            to_address: self.to_address,
            subject: self.subject,
            body: self.body,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            is_read: self.is_read,
            paymail: self.paymail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let msg = Message::builder("m1").subject("Hello").build();
        assert_eq!(msg.id.as_str(), "m1");
        assert_eq!(msg.subject, "Hello");
        assert!(!msg.is_read);
        assert!(msg.paymail.is_none());
    }

    #[test]
    fn test_builder_sets_parties() {
        let msg = Message::builder("m1")
            .from("alice.sol", "7xKX")
            .to("yourname.sol", "5FHn")
            .build();
        assert_eq!(msg.from, "alice.sol");
        assert_eq!(msg.from_address, "7xKX");
        assert_eq!(msg.to, "yourname.sol");
        assert_eq!(msg.to_address, "5FHn");
    }

    #[test]
    fn test_negative_amount_clamped() {
        let paymail = PaymailAttachment::new(-5.0, "SOL");
        assert_eq!(paymail.amount, 0.0);
        assert!(!paymail.claimed);
    }

    #[test]
    fn test_paymail_display() {
        assert_eq!(PaymailAttachment::new(10.0, "iUSD").display(), "10 iUSD");
        assert_eq!(PaymailAttachment::new(0.5, "SOL").display(), "0.5 SOL");
        assert_eq!(PaymailAttachment::new(10.5, "iUSD").display(), "10.5 iUSD");
        assert_eq!(PaymailAttachment::new(2.25, "SOL").display(), "2.25 SOL");
    }

    #[test]
    fn test_has_unclaimed_payment() {
        let plain = Message::builder("m1").build();
        assert!(!plain.has_unclaimed_payment());

        let paid = Message::builder("m2")
            .paymail(PaymailAttachment::new(10.0, "iUSD"))
            .build();
        assert!(paid.has_unclaimed_payment());
    }
}
