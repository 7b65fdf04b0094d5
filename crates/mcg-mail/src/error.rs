//! Error types for mail operations

/// Errors surfaced by the message store and application state
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MailError {
    #[error("Message not found: {0}")]
    NotFound(String),

    #[error("Message already exists: {0}")]
    DuplicateMessage(String),

    #[error("Required field is empty: {0}")]
    EmptyField(&'static str),

    #[error("Message has no payment attached: {0}")]
    NoAttachment(String),

    #[error("Invalid {name} endpoint: {url}")]
    InvalidEndpoint { name: &'static str, url: String },
}
