//! Domain models for mail entities

mod message;
mod page;
mod wallet;

pub use message::{Message, MessageBuilder, MessageId, PaymailAttachment};
pub use page::Page;
pub use wallet::{DEFAULT_PUBLIC_KEY, DEFAULT_SOL_NAME, WalletConnection};
