//! Wallet connection model

use serde::{Deserialize, Serialize};

use crate::format::{initials, shorten_address};

/// Public key of the mock wallet identity
pub const DEFAULT_PUBLIC_KEY: &str = "5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty";

/// .sol name of the mock wallet identity
pub const DEFAULT_SOL_NAME: &str = "yourname.sol";

/// The connected wallet identity shown in the top bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletConnection {
    /// Wallet public key (base58)
    pub public_key: String,
    /// .sol name used as display name
    pub sol_name: String,
    /// Whether the wallet handshake has completed
    pub connected: bool,
}

impl WalletConnection {
    /// Create a disconnected wallet identity
    pub fn new(public_key: impl Into<String>, sol_name: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            sol_name: sol_name.into(),
            connected: false,
        }
    }

    /// Public key shortened for the top bar (e.g., "5FHn...94ty")
    pub fn short_key(&self) -> String {
        shorten_address(&self.public_key, 4, 4)
    }

    /// Two-letter avatar text derived from the .sol name
    pub fn avatar_initials(&self) -> String {
        initials(&self.sol_name)
    }
}

impl Default for WalletConnection {
    fn default() -> Self {
        Self::new(DEFAULT_PUBLIC_KEY, DEFAULT_SOL_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disconnected() {
        let wallet = WalletConnection::default();
        assert!(!wallet.connected);
        assert_eq!(wallet.sol_name, "yourname.sol");
    }

    #[test]
    fn test_short_key() {
        let wallet = WalletConnection::default();
        assert_eq!(wallet.short_key(), "5FHn...94ty");
    }

    #[test]
    fn test_avatar_initials() {
        let wallet = WalletConnection::default();
        assert_eq!(wallet.avatar_initials(), "YO");
    }
}
