//! Application state store
//!
//! Single source of truth for the UI. Every intent is a synchronous
//! transition on this struct; views read from it and call back into it,
//! they never mutate shared state themselves.

use anyhow::Result;
use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use std::sync::Arc;

use crate::compose::{OutgoingMessage, ReplyContext};
use crate::error::MailError;
use crate::mock;
use crate::models::{Message, MessageId, Page, WalletConnection};
use crate::query::{MessageSummary, list_messages};
use crate::storage::MessageStore;

/// Root application state
pub struct AppState {
    store: Arc<dyn MessageStore>,
    wallet: WalletConnection,
    current_page: Page,
    selected: Option<MessageId>,
    compose_open: bool,
    reply_context: Option<ReplyContext>,
}

impl AppState {
    /// Create state over an existing store, disconnected, on the inbox page
    pub fn new(store: Arc<dyn MessageStore>, wallet: WalletConnection) -> Self {
        Self {
            store,
            wallet,
            current_page: Page::Inbox,
            selected: None,
            compose_open: false,
            reply_context: None,
        }
    }

    /// Create state seeded with the mock inbox and the default wallet
    pub fn seeded(now: DateTime<Utc>) -> Result<Self> {
        let store: Arc<dyn MessageStore> = Arc::new(mock::seeded_store(now)?);
        Ok(Self::new(store, WalletConnection::default()))
    }

    // === Read accessors ===

    pub fn is_connected(&self) -> bool {
        self.wallet.connected
    }

    pub fn wallet(&self) -> &WalletConnection {
        &self.wallet
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn selected_id(&self) -> Option<&MessageId> {
        self.selected.as_ref()
    }

    /// The selected message as currently stored
    pub fn selected_message(&self) -> Result<Option<Message>> {
        match &self.selected {
            Some(id) => self.store.get_message(id),
            None => Ok(None),
        }
    }

    pub fn is_compose_open(&self) -> bool {
        self.compose_open
    }

    /// Whether list clicks, sidebar navigation and new compose requests apply
    ///
    /// False before the wallet connects and while the compose modal is open.
    pub fn is_browsing(&self) -> bool {
        self.wallet.connected && !self.compose_open
    }

    pub fn reply_context(&self) -> Option<&ReplyContext> {
        self.reply_context.as_ref()
    }

    pub fn store(&self) -> Arc<dyn MessageStore> {
        self.store.clone()
    }

    /// Inbox rows in collection order
    pub fn messages(&self) -> Result<Vec<MessageSummary>> {
        list_messages(self.store.as_ref())
    }

    pub fn message_count(&self) -> Result<usize> {
        self.store.count_messages()
    }

    pub fn unread_count(&self) -> Result<usize> {
        self.store.count_unread()
    }

    // === Intents ===

    /// Complete the (stubbed) wallet handshake
    pub fn connect(&mut self) {
        if !self.wallet.connected {
            info!("Wallet connected: {}", self.wallet.sol_name);
        }
        self.wallet.connected = true;
    }

    /// Open a message in the detail view, marking it read if needed
    pub fn select_message(&mut self, id: &MessageId) -> Result<()> {
        let message = self
            .store
            .get_message(id)?
            .ok_or_else(|| MailError::NotFound(id.to_string()))?;

        if !message.is_read {
            self.store.mark_read(id)?;
            debug!("Marked message {} as read", id);
        }

        self.selected = Some(id.clone());
        self.current_page = Page::MessageDetail;
        debug!("Selected message {}", id);
        Ok(())
    }

    /// Clear the selection and show the inbox
    pub fn back_to_inbox(&mut self) {
        self.selected = None;
        self.current_page = Page::Inbox;
    }

    /// Navigate from the sidebar
    ///
    /// Returns false if the page needs a selection and none exists.
    pub fn change_page(&mut self, page: Page) -> bool {
        if page.requires_selection() && self.selected.is_none() {
            warn!("Ignoring navigation to {:?}: no message selected", page);
            return false;
        }
        self.current_page = page;
        debug!("Navigated to {:?}", page);
        true
    }

    /// Open the compose modal for a new message
    pub fn open_compose(&mut self) {
        self.reply_context = None;
        self.compose_open = true;
    }

    /// Open the compose modal as a reply to the selected message
    ///
    /// Returns false (and does nothing) if no message is selected.
    pub fn start_reply(&mut self) -> Result<bool> {
        let Some(message) = self.selected_message()? else {
            return Ok(false);
        };
        self.reply_context = Some(ReplyContext {
            address: message.from,
            subject: message.subject,
        });
        self.compose_open = true;
        Ok(true)
    }

    /// Close the compose modal without sending
    pub fn close_compose(&mut self) {
        self.compose_open = false;
    }

    /// Send a message
    ///
    /// Nothing is delivered or stored; the intent is logged and the modal
    /// closes.
    pub fn send(&mut self, to: &str, subject: &str, body: &str) -> Result<()> {
        for (name, value) in [("to", to), ("subject", subject), ("body", body)] {
            if value.is_empty() {
                return Err(MailError::EmptyField(name).into());
            }
        }

        info!(
            "Sending message to {} (subject: {:?}, {} bytes)",
            to,
            subject,
            body.len()
        );
        self.compose_open = false;
        Ok(())
    }

    /// Send a draft taken from the compose modal
    pub fn send_outgoing(&mut self, outgoing: &OutgoingMessage) -> Result<()> {
        self.send(&outgoing.to, &outgoing.subject, &outgoing.body)
    }

    /// Mark a message's payment as claimed. No funds move.
    ///
    /// Returns true if the flag changed.
    pub fn claim_payment(&mut self, id: &MessageId) -> Result<bool> {
        let changed = self.store.mark_claimed(id)?;
        if changed {
            info!("Claimed payment on message {}", id);
        }
        Ok(changed)
    }
}
