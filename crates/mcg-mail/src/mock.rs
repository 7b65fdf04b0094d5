//! Static seed data for the mock inbox
//!
//! Timestamps are relative to the moment the inbox is seeded.

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};

use crate::models::{DEFAULT_PUBLIC_KEY, DEFAULT_SOL_NAME, Message, PaymailAttachment};
use crate::storage::InMemoryMessageStore;

const WELCOME_BODY: &str = "Hey there!

Welcome to the future of private, on-chain communication. I'm excited to be one of the first to send you a message on mcg.mail.

This email is:
- End-to-end encrypted using Arcium
- Verifiable on Solana blockchain
- Only readable by you with your Phantom wallet
- Censorship-resistant and truly private

Looking forward to connecting with you on this new platform!

Best,
Alice";

const COLLABORATION_BODY: &str = "Hi,

I've been following your work and I think there's a great opportunity for us to collaborate on a new DeFi project.

Would you be interested in discussing this further? Let me know your availability.

Thanks,
Bob";

const PAYMENT_BODY: &str = "Hello,

Sending over the payment we discussed. Thanks for your excellent work on the project!

Best regards,
Charlie";

/// Build the seed messages, newest first, with timestamps relative to `now`
pub fn seed_messages(now: DateTime<Utc>) -> Vec<Message> {
    vec![
        Message::builder("1")
            .from("alice.sol", "7xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsU")
            .to(DEFAULT_SOL_NAME, DEFAULT_PUBLIC_KEY)
            .subject("Welcome to mcg.mail!")
            .body(WELCOME_BODY)
            .timestamp(now - Duration::hours(2))
            .read(false)
            .build(),
        Message::builder("2")
            .from("bob.sol", "8xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsV")
            .to(DEFAULT_SOL_NAME, DEFAULT_PUBLIC_KEY)
            .subject("Project collaboration opportunity")
            .body(COLLABORATION_BODY)
            .timestamp(now - Duration::hours(24))
            .read(true)
            .build(),
        Message::builder("3")
            .from("charlie.sol", "9xKXtg2CW87d97TXJSDpbD5jBkheTqA83TZRuJosgAsW")
            .to(DEFAULT_SOL_NAME, DEFAULT_PUBLIC_KEY)
            .subject("Payment for services")
            .body(PAYMENT_BODY)
            .timestamp(now - Duration::hours(48))
            .read(true)
            .paymail(PaymailAttachment::new(10.0, "iUSD"))
            .build(),
    ]
}

/// Create an in-memory store holding the seed messages
pub fn seeded_store(now: DateTime<Utc>) -> Result<InMemoryMessageStore> {
    InMemoryMessageStore::with_messages(seed_messages(now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_unique() {
        let messages = seed_messages(Utc::now());
        let ids: HashSet<_> = messages.iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids.len(), messages.len());
    }

    #[test]
    fn test_seed_shape() {
        let now = Utc::now();
        let messages = seed_messages(now);
        assert_eq!(messages.len(), 3);

        assert_eq!(messages[0].from, "alice.sol");
        assert!(!messages[0].is_read);
        assert_eq!(messages[0].timestamp, now - Duration::hours(2));

        assert!(messages[1].is_read);

        let paymail = messages[2].paymail.as_ref().unwrap();
        assert_eq!(paymail.amount, 10.0);
        assert_eq!(paymail.currency, "iUSD");
        assert!(!paymail.claimed);
    }

    #[test]
    fn test_seed_addressed_to_wallet() {
        for msg in seed_messages(Utc::now()) {
            assert_eq!(msg.to, DEFAULT_SOL_NAME);
            assert_eq!(msg.to_address, DEFAULT_PUBLIC_KEY);
        }
    }

    #[test]
    fn test_body_keeps_line_breaks() {
        let messages = seed_messages(Utc::now());
        assert!(messages[0].body.contains("\n- End-to-end encrypted using Arcium\n"));
    }
}
