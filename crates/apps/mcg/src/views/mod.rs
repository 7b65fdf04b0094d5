//! GPUI views for mcg.mail

mod compose;
mod connect;
mod inbox;
mod message;
mod placeholder;
mod settings;

pub use compose::{ComposeEvent, ComposeView};
pub use connect::ConnectScreen;
pub use inbox::{InboxEvent, InboxView};
pub use message::{MessageView, MessageViewEvent};
pub use placeholder::PlaceholderView;
pub use settings::SettingsView;
