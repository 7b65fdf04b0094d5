//! mcg-mail crate - Business logic for the mcg.mail client
//!
//! This crate provides platform-independent functionality including:
//! - Domain models (Message, PaymailAttachment, WalletConnection, Page)
//! - Mock seed data and an in-memory message store
//! - Application state store with the UI intents (select, reply, send...)
//! - Compose draft logic and recipient suggestions
//! - Placeholder encryption and ledger connection providers
//! - Theme preference and display formatting
//!
//! This crate has zero UI dependencies.

pub mod compose;
pub mod config;
pub mod crypto;
pub mod error;
pub mod format;
pub mod mock;
pub mod models;
pub mod query;
pub mod rpc;
pub mod settings;
pub mod state;
pub mod storage;
pub mod theme;

pub use compose::{ComposeDraft, OutgoingMessage, ReplyContext, suggest_recipients};
pub use config::EndpointConfig;
pub use crypto::{EncryptedComposePayload, pseudo_encrypt_message};
pub use error::MailError;
pub use models::{Message, MessageId, Page, PaymailAttachment, WalletConnection};
pub use query::{MessageDetail, MessageSummary, get_message_detail, list_messages};
pub use rpc::{Commitment, Connection, Providers, create_providers, is_delegated_inbox};
pub use settings::SettingsModel;
pub use state::AppState;
pub use storage::{InMemoryMessageStore, MessageStore};
pub use theme::{ResolvedTheme, ThemePreference};
