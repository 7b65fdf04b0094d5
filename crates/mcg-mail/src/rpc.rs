//! Ledger connection providers
//!
//! Two named endpoints: the base layer (`l1`) and the ephemeral rollup
//! (`er`). Nothing here opens a connection; these are the seams where real
//! ledger queries would be plugged in.

use anyhow::Result;
use log::{debug, info};
use url::Url;

use crate::config::EndpointConfig;
use crate::error::MailError;

/// Commitment level requested from an RPC node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Commitment {
    Processed,
    #[default]
    Confirmed,
    Finalized,
}

impl Commitment {
    pub fn as_str(self) -> &'static str {
        match self {
            Commitment::Processed => "processed",
            Commitment::Confirmed => "confirmed",
            Commitment::Finalized => "finalized",
        }
    }
}

/// A configured (but never opened) RPC connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    name: &'static str,
    endpoint: Url,
    commitment: Commitment,
}

impl Connection {
    /// Validate the endpoint URL. Only http(s) endpoints are accepted.
    pub fn new(name: &'static str, endpoint: &str, commitment: Commitment) -> Result<Self> {
        let invalid = || MailError::InvalidEndpoint {
            name,
            url: endpoint.to_string(),
        };
        let url = Url::parse(endpoint).map_err(|_| invalid())?;
        if !matches!(url.scheme(), "http" | "https") || url.host_str().is_none() {
            return Err(invalid().into());
        }

        Ok(Self {
            name,
            endpoint: url,
            commitment,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn commitment(&self) -> Commitment {
        self.commitment
    }
}

/// Base-layer and rollup connections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Providers {
    pub l1: Connection,
    pub er: Connection,
}

impl Providers {
    /// Build both connections from resolved endpoints
    pub fn from_config(config: &EndpointConfig) -> Result<Self> {
        Ok(Self {
            l1: Connection::new("l1", &config.l1_rpc, Commitment::Confirmed)?,
            er: Connection::new("er", &config.er_rpc, Commitment::Confirmed)?,
        })
    }
}

/// Create the providers from environment, config file and defaults
pub fn create_providers() -> Result<Providers> {
    let config = EndpointConfig::load()?;
    let providers = Providers::from_config(&config)?;
    info!(
        "Providers configured: l1={} er={}",
        providers.l1.endpoint(),
        providers.er.endpoint()
    );
    Ok(providers)
}

/// Whether the owner's inbox is delegated to the rollup
///
/// Always true: the delegation account is never read.
pub fn is_delegated_inbox(owner: &str) -> bool {
    debug!("Delegation check for {} (stubbed)", owner);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_providers() {
        let providers = Providers::from_config(&EndpointConfig::default()).unwrap();
        assert_eq!(providers.l1.name(), "l1");
        assert_eq!(providers.l1.endpoint().host_str(), Some("api.devnet.solana.com"));
        assert_eq!(providers.er.endpoint().as_str(), "https://devnet-as.magicblock.app/");
        assert_eq!(providers.l1.commitment(), Commitment::Confirmed);
        assert_eq!(providers.er.commitment().as_str(), "confirmed");
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = Connection::new("l1", "not a url", Commitment::Confirmed).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MailError>(),
            Some(MailError::InvalidEndpoint { name: "l1", .. })
        ));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        assert!(Connection::new("er", "ftp://example.com", Commitment::Confirmed).is_err());
        assert!(Connection::new("er", "http://localhost:8899", Commitment::Processed).is_ok());
    }

    #[test]
    fn test_delegation_stub() {
        assert!(is_delegated_inbox("5FHneW46xGXgs5mUiveU4sbTyGBzmstUspZC92UhjJM694ty"));
        assert!(is_delegated_inbox(""));
    }
}
