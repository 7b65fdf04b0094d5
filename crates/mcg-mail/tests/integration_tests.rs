//! Integration tests for the mcg-mail crate
//!
//! These tests drive the application state the way the UI does: connect,
//! browse, read, reply, send and claim.

use std::sync::Arc;

use chrono::{Duration, Utc};
use mcg_mail::models::{Message, MessageId, Page, PaymailAttachment, WalletConnection};
use mcg_mail::query::{get_message_detail, list_messages};
use mcg_mail::storage::{InMemoryMessageStore, MessageStore};
use mcg_mail::{AppState, ComposeDraft, EndpointConfig, MailError, Providers};

/// Helper to create test messages
fn make_message(id: &str, from: &str, subject: &str, age_hours: i64, read: bool) -> Message {
    Message::builder(id)
        .from(from, format!("{}-address", from))
        .to("you.sol", "you-address")
        .subject(subject)
        .body(format!("Body of message {}", id))
        .timestamp(Utc::now() - Duration::hours(age_hours))
        .read(read)
        .build()
}

fn connected_state() -> AppState {
    let mut state = AppState::seeded(Utc::now()).unwrap();
    state.connect();
    state
}

fn read_flags(state: &AppState) -> Vec<(String, bool)> {
    state
        .messages()
        .unwrap()
        .into_iter()
        .map(|m| (m.id.to_string(), m.is_read))
        .collect()
}

#[test]
fn test_connect_then_browse_seed_inbox() {
    let mut state = AppState::seeded(Utc::now()).unwrap();
    assert!(!state.is_connected());

    state.connect();
    assert!(state.is_connected());
    assert_eq!(state.current_page(), Page::Inbox);

    let summaries = state.messages().unwrap();
    let senders: Vec<_> = summaries.iter().map(|m| m.from.as_str()).collect();
    assert_eq!(senders, vec!["alice.sol", "bob.sol", "charlie.sol"]);
    assert_eq!(state.unread_count().unwrap(), 1);
    assert!(summaries[2].has_payment);
}

#[test]
fn test_select_marks_only_that_message_read() {
    let mut state = connected_state();
    let before = read_flags(&state);

    state.select_message(&MessageId::new("1")).unwrap();
    let after = read_flags(&state);

    assert_eq!(after[0], ("1".to_string(), true));
    assert_eq!(&after[1..], &before[1..]);
    assert_eq!(state.current_page(), Page::MessageDetail);
    assert_eq!(state.selected_id(), Some(&MessageId::new("1")));
}

#[test]
fn test_selecting_read_message_changes_nothing() {
    let mut state = connected_state();
    let before = read_flags(&state);

    state.select_message(&MessageId::new("2")).unwrap();
    assert_eq!(read_flags(&state), before);
}

#[test]
fn test_select_unknown_message_is_rejected() {
    let mut state = connected_state();
    let err = state.select_message(&MessageId::new("nope")).unwrap_err();

    assert_eq!(
        err.downcast_ref::<MailError>(),
        Some(&MailError::NotFound("nope".to_string()))
    );
    assert_eq!(state.current_page(), Page::Inbox);
    assert!(state.selected_id().is_none());
}

#[test]
fn test_navigation_never_changes_message_count() {
    let mut state = connected_state();
    let count = state.message_count().unwrap();

    for page in Page::NAVIGATION {
        assert!(state.change_page(page));
        assert_eq!(state.message_count().unwrap(), count);
    }
    state.select_message(&MessageId::new("3")).unwrap();
    state.back_to_inbox();
    state.open_compose();
    state.close_compose();
    assert_eq!(state.message_count().unwrap(), count);
}

#[test]
fn test_detail_page_requires_selection() {
    let mut state = connected_state();
    assert!(!state.change_page(Page::MessageDetail));
    assert_eq!(state.current_page(), Page::Inbox);

    state.select_message(&MessageId::new("2")).unwrap();
    state.change_page(Page::Settings);
    assert!(state.change_page(Page::MessageDetail));
    assert_eq!(state.current_page(), Page::MessageDetail);

    state.back_to_inbox();
    assert!(state.selected_id().is_none());
    assert!(!state.change_page(Page::MessageDetail));
}

#[test]
fn test_reply_prefills_compose() {
    let store = InMemoryMessageStore::with_messages([make_message(
        "hello",
        "dave.sol",
        "Hello",
        1,
        false,
    )])
    .unwrap();
    let mut state = AppState::new(Arc::new(store), WalletConnection::default());
    state.connect();

    // No selection: reply is a no-op
    assert!(!state.start_reply().unwrap());
    assert!(!state.is_compose_open());

    state.select_message(&MessageId::new("hello")).unwrap();
    assert!(state.start_reply().unwrap());
    assert!(state.is_compose_open());

    let draft = ComposeDraft::from_reply(state.reply_context());
    assert_eq!(draft.to(), "dave.sol");
    assert_eq!(draft.subject(), "Re: Hello");
    assert_eq!(draft.body(), "");
    assert!(!draft.can_send());
}

#[test]
fn test_new_compose_clears_reply_context() {
    let mut state = connected_state();
    state.select_message(&MessageId::new("1")).unwrap();
    state.start_reply().unwrap();
    state.close_compose();

    state.open_compose();
    assert!(state.reply_context().is_none());
    let draft = ComposeDraft::from_reply(state.reply_context());
    assert_eq!(draft, ComposeDraft::new());
}

#[test]
fn test_send_gating() {
    let mut state = connected_state();
    state.open_compose();

    let mut draft = ComposeDraft::new();
    draft.set_to("bob.sol");
    draft.set_subject("Hi");
    assert!(!draft.can_send());
    assert!(draft.take_outgoing().is_none());

    draft.set_body(" ");
    assert!(draft.can_send());

    let outgoing = draft.take_outgoing().unwrap();
    assert_eq!(draft, ComposeDraft::new());

    let count = state.message_count().unwrap();
    state.send_outgoing(&outgoing).unwrap();
    assert!(!state.is_compose_open());
    assert_eq!(state.message_count().unwrap(), count);
}

#[test]
fn test_send_rejects_empty_fields() {
    let mut state = connected_state();
    state.open_compose();

    let err = state.send("bob.sol", "", "body").unwrap_err();
    assert_eq!(
        err.downcast_ref::<MailError>(),
        Some(&MailError::EmptyField("subject"))
    );
    assert!(state.is_compose_open());
}

#[test]
fn test_recipient_suggestions() {
    let mut draft = ComposeDraft::new();
    draft.set_to("ali");
    assert_eq!(
        draft.suggestions(),
        &["ali.sol", "ali123.sol", "ali_official.sol"]
    );

    assert_eq!(draft.choose_suggestion(1), Some("ali123.sol"));
    assert_eq!(draft.to(), "ali123.sol");
    assert!(draft.suggestions().is_empty());

    draft.set_to("");
    assert!(draft.suggestions().is_empty());
}

#[test]
fn test_claim_payment_flow() {
    let mut state = connected_state();
    let id = MessageId::new("3");
    state.select_message(&id).unwrap();

    let detail = get_message_detail(state.store().as_ref(), &id)
        .unwrap()
        .unwrap();
    let paymail = detail.paymail.unwrap();
    assert_eq!(paymail.display(), "10 iUSD");
    assert!(!paymail.claimed);

    assert!(state.claim_payment(&id).unwrap());
    assert!(!state.claim_payment(&id).unwrap());

    let claimed = state.selected_message().unwrap().unwrap();
    assert!(claimed.paymail.as_ref().unwrap().claimed);
    assert!(!claimed.has_unclaimed_payment());
}

#[test]
fn test_claim_without_attachment_fails() {
    let mut state = connected_state();
    let err = state.claim_payment(&MessageId::new("1")).unwrap_err();
    assert_eq!(
        err.downcast_ref::<MailError>(),
        Some(&MailError::NoAttachment("1".to_string()))
    );
}

#[test]
fn test_custom_store_listing_order() {
    let store = InMemoryMessageStore::new();
    store
        .insert_message(make_message("b", "bob.sol", "Second", 1, true))
        .unwrap();
    store
        .insert_message(make_message("a", "alice.sol", "First", 5, false))
        .unwrap();
    let paid = Message::builder("c")
        .from("carol.sol", "carol-address")
        .subject("Paid")
        .paymail(PaymailAttachment::new(0.5, "SOL"))
        .build();
    store.insert_message(paid).unwrap();

    let ids: Vec<_> = list_messages(&store)
        .unwrap()
        .into_iter()
        .map(|m| m.id.to_string())
        .collect();
    assert_eq!(ids, vec!["b", "a", "c"]);

    let duplicate = store.insert_message(make_message("a", "x.sol", "Dup", 0, false));
    assert!(duplicate.is_err());
    assert_eq!(store.count_messages().unwrap(), 3);
}

#[test]
fn test_payload_digest() {
    let first = mcg_mail::pseudo_encrypt_message("Hi", "there");
    let second = mcg_mail::pseudo_encrypt_message("Hi", "there");
    assert_eq!(first.ciphertext, second.ciphertext);
    assert_ne!(first.nonce, second.nonce);
    assert_eq!(first.ciphertext_hex().len(), 64);
    assert_eq!(first.nonce_hex().len(), 32);

    // Separator keeps field boundaries distinct
    let shifted = mcg_mail::pseudo_encrypt_message("Hit", "here");
    assert_ne!(first.ciphertext, shifted.ciphertext);
}

#[test]
fn test_provider_resolution() {
    let config = EndpointConfig::resolve(Some("http://localhost:8899".to_string()), None, None);
    let providers = Providers::from_config(&config).unwrap();
    assert_eq!(providers.l1.endpoint().port(), Some(8899));
    assert_eq!(
        providers.er.endpoint().as_str(),
        "https://devnet-as.magicblock.app/"
    );

    let bad = EndpointConfig::resolve(Some("localhost".to_string()), None, None);
    assert!(Providers::from_config(&bad).is_err());
}
