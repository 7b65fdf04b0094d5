//! Settings screen model
//!
//! Display-only values for the profile and spam filter panels. Nothing here
//! is wired to a mutation; the spam-stake controls are future work.

use crate::models::DEFAULT_SOL_NAME;

pub const ABOUT_TEXT: &str = "Powered by MCG Protocol with Phantom wallet integration, \
Solana Name Service, Arcium for privacy, and Triton for speed.";

pub const ABOUT_LINKS: [&str; 3] = ["Documentation", "Privacy Policy", "Terms of Service"];

/// Values rendered by the settings screen
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsModel {
    /// .sol names available as the sending identity
    pub sending_identities: Vec<String>,
    /// Index into `sending_identities`
    pub default_identity: usize,
    pub anti_spam_enabled: bool,
    /// Stake strangers must put up to message this inbox
    pub stake_amount: f64,
    pub stake_currencies: Vec<String>,
    pub allowlist: Vec<String>,
    pub blocklist: Vec<String>,
}

impl Default for SettingsModel {
    fn default() -> Self {
        Self {
            sending_identities: vec![DEFAULT_SOL_NAME.to_string(), "alternative.sol".to_string()],
            default_identity: 0,
            anti_spam_enabled: false,
            stake_amount: 1.0,
            stake_currencies: vec!["iUSD".to_string(), "SOL".to_string()],
            allowlist: vec!["alice.sol".to_string(), "bob.sol".to_string()],
            blocklist: Vec::new(),
        }
    }
}

impl SettingsModel {
    pub fn default_identity(&self) -> Option<&str> {
        self.sending_identities
            .get(self.default_identity)
            .map(String::as_str)
    }

    /// Stake amount with two decimals (e.g., "1.00")
    pub fn stake_amount_display(&self) -> String {
        format!("{:.2}", self.stake_amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = SettingsModel::default();
        assert_eq!(settings.default_identity(), Some("yourname.sol"));
        assert!(!settings.anti_spam_enabled);
        assert_eq!(settings.stake_amount_display(), "1.00");
        assert_eq!(settings.stake_currencies, vec!["iUSD", "SOL"]);
        assert_eq!(settings.allowlist, vec!["alice.sol", "bob.sol"]);
        assert!(settings.blocklist.is_empty());
    }
}
