//! Placeholder message "encryption"
//!
//! Hashes the subject and body into a fixed-size digest and pairs it with a
//! random nonce. The digest is one-way: there is no decryption path. This is
//! the seam where real recipient encryption would be substituted.

use log::warn;
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

/// Nonce length in bytes
pub const NONCE_LEN: usize = 16;

/// Digest length in bytes
pub const CIPHERTEXT_LEN: usize = 32;

/// Output of [`pseudo_encrypt_message`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedComposePayload {
    pub ciphertext: [u8; CIPHERTEXT_LEN],
    pub nonce: [u8; NONCE_LEN],
}

impl EncryptedComposePayload {
    pub fn ciphertext_hex(&self) -> String {
        hex::encode(self.ciphertext)
    }

    pub fn nonce_hex(&self) -> String {
        hex::encode(self.nonce)
    }
}

/// Fill a buffer with random bytes
///
/// Uses the OS source, falling back to the thread-local generator if the OS
/// source is unavailable.
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut buf = [0u8; N];
    if let Err(e) = OsRng.try_fill_bytes(&mut buf) {
        warn!("OS random source unavailable ({}), using thread rng", e);
        rand::thread_rng().fill_bytes(&mut buf);
    }
    buf
}

/// Digest `subject \0 body` and attach a fresh nonce
pub fn pseudo_encrypt_message(subject: &str, body: &str) -> EncryptedComposePayload {
    let mut hasher = Sha256::new();
    hasher.update(subject.as_bytes());
    hasher.update([0u8]);
    hasher.update(body.as_bytes());

    EncryptedComposePayload {
        ciphertext: hasher.finalize().into(),
        nonce: random_bytes(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_deterministic() {
        let a = pseudo_encrypt_message("Hello", "World");
        let b = pseudo_encrypt_message("Hello", "World");
        assert_eq!(a.ciphertext, b.ciphertext);
        assert_ne!(a.nonce, b.nonce);
    }

    #[test]
    fn test_separator_distinguishes_fields() {
        let a = pseudo_encrypt_message("ab", "c");
        let b = pseudo_encrypt_message("a", "bc");
        assert_ne!(a.ciphertext, b.ciphertext);
    }

    #[test]
    fn test_known_digest() {
        // sha256("\0")
        let payload = pseudo_encrypt_message("", "");
        assert_eq!(
            payload.ciphertext_hex(),
            "6e340b9cffb37a989ca544e6bb780a2c78901d3fb33738768511a30617afa01d"
        );
    }

    #[test]
    fn test_hex_lengths() {
        let payload = pseudo_encrypt_message("s", "b");
        assert_eq!(payload.ciphertext_hex().len(), CIPHERTEXT_LEN * 2);
        assert_eq!(payload.nonce_hex().len(), NONCE_LEN * 2);
    }
}
