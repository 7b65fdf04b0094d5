//! Compose draft state
//!
//! Local state of the compose modal: the three input fields plus recipient
//! suggestions. Suggestions are synthetic; there is no name registry behind
//! them.

use serde::{Deserialize, Serialize};

/// Prefix added to the subject of a reply
pub const REPLY_PREFIX: &str = "Re: ";

/// Recipient and subject to pre-fill when replying
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyContext {
    /// Sender of the original message
    pub address: String,
    /// Subject of the original message (without prefix)
    pub subject: String,
}

/// A completed draft ready to hand to the send intent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Build the recipient suggestions for the typed text
///
/// Produces `v.sol`, `v123.sol` and `v_official.sol`, kept only when they
/// contain the typed text case-insensitively. Empty input yields nothing.
pub fn suggest_recipients(value: &str) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    let needle = value.to_lowercase();
    [
        format!("{}.sol", value),
        format!("{}123.sol", value),
        format!("{}_official.sol", value),
    ]
    .into_iter()
    .filter(|s| s.to_lowercase().contains(&needle))
    .collect()
}

/// Compose modal draft
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeDraft {
    to: String,
    subject: String,
    body: String,
    suggestions: Vec<String>,
}

impl ComposeDraft {
    /// Empty draft for a new message
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled from a reply context
    pub fn reply(context: &ReplyContext) -> Self {
        Self {
            to: context.address.clone(),
            subject: format!("{}{}", REPLY_PREFIX, context.subject),
            ..Self::default()
        }
    }

    /// Draft for a new message or a reply
    pub fn from_reply(context: Option<&ReplyContext>) -> Self {
        context.map(Self::reply).unwrap_or_default()
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// Update the recipient field and regenerate suggestions
    pub fn set_to(&mut self, value: impl Into<String>) {
        self.to = value.into();
        self.suggestions = suggest_recipients(&self.to);
    }

    pub fn set_subject(&mut self, value: impl Into<String>) {
        self.subject = value.into();
    }

    pub fn set_body(&mut self, value: impl Into<String>) {
        self.body = value.into();
    }

    /// Accept a suggestion as the recipient and hide the list
    pub fn choose_suggestion(&mut self, index: usize) -> Option<&str> {
        let chosen = self.suggestions.get(index)?.clone();
        self.to = chosen;
        self.suggestions.clear();
        Some(self.to.as_str())
    }

    /// Send is enabled only when recipient, subject and body are all non-empty
    pub fn can_send(&self) -> bool {
        !self.to.is_empty() && !self.subject.is_empty() && !self.body.is_empty()
    }

    /// Take the draft contents if sendable, leaving the draft cleared
    pub fn take_outgoing(&mut self) -> Option<OutgoingMessage> {
        if !self.can_send() {
            return None;
        }
        let draft = std::mem::take(self);
        Some(OutgoingMessage {
            to: draft.to,
            subject: draft.subject,
            body: draft.body,
        })
    }

    /// Reset every field
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
