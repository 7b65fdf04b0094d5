//! Configuration loading for ledger endpoints
//!
//! Each endpoint is resolved in order of priority:
//! 1. Runtime environment variables (`MCG_L1_RPC`, `MCG_ER_RPC`)
//! 2. JSON file in the config directory (`providers.json`)
//! 3. Built-in devnet defaults

use anyhow::Result;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Endpoint override filename in the config directory
const PROVIDERS_FILE: &str = "providers.json";

/// Environment variable overriding the base-layer RPC endpoint
pub const L1_RPC_ENV: &str = "MCG_L1_RPC";

/// Environment variable overriding the ephemeral-rollup RPC endpoint
pub const ER_RPC_ENV: &str = "MCG_ER_RPC";

pub const DEFAULT_L1_RPC: &str = "https://api.devnet.solana.com";
pub const DEFAULT_ER_RPC: &str = "https://devnet-as.magicblock.app/";

/// On-disk format of `providers.json`; both keys are optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderFile {
    #[serde(default)]
    pub l1_rpc: Option<String>,
    #[serde(default)]
    pub er_rpc: Option<String>,
}

/// Resolved endpoint URLs (not yet validated)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    pub l1_rpc: String,
    pub er_rpc: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            l1_rpc: DEFAULT_L1_RPC.to_string(),
            er_rpc: DEFAULT_ER_RPC.to_string(),
        }
    }
}

impl EndpointConfig {
    /// Load endpoints from the environment, config file and defaults
    pub fn load() -> Result<Self> {
        let file = if config::config_exists(PROVIDERS_FILE) {
            Some(config::load_json::<ProviderFile>(PROVIDERS_FILE)?)
        } else {
            None
        };

        Ok(Self::resolve(
            std::env::var(L1_RPC_ENV).ok(),
            std::env::var(ER_RPC_ENV).ok(),
            file,
        ))
    }

    /// Load endpoints from a specific JSON file, filling gaps with defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let file: ProviderFile = config::load_json_file(path)?;
        Ok(Self::resolve(None, None, Some(file)))
    }

    /// Combine the sources by priority. Empty values count as unset.
    pub fn resolve(
        env_l1: Option<String>,
        env_er: Option<String>,
        file: Option<ProviderFile>,
    ) -> Self {
        let file = file.unwrap_or_default();
        let pick = |env: Option<String>, from_file: Option<String>, default: &str, name: &str| {
            if let Some(value) = non_empty(env) {
                debug!("{} endpoint from environment", name);
                value
            } else if let Some(value) = non_empty(from_file) {
                debug!("{} endpoint from {}", name, PROVIDERS_FILE);
                value
            } else {
                default.to_string()
            }
        };

        Self {
            l1_rpc: pick(env_l1, file.l1_rpc, DEFAULT_L1_RPC, "l1"),
            er_rpc: pick(env_er, file.er_rpc, DEFAULT_ER_RPC, "er"),
        }
    }

    /// Get the default override file path (~/.config/mcg/providers.json)
    pub fn default_config_path() -> Option<PathBuf> {
        config::config_path(PROVIDERS_FILE)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = EndpointConfig::resolve(None, None, None);
        assert_eq!(config, EndpointConfig::default());
        assert_eq!(config.l1_rpc, "https://api.devnet.solana.com");
        assert_eq!(config.er_rpc, "https://devnet-as.magicblock.app/");
    }

    #[test]
    fn test_env_beats_file() {
        let file = ProviderFile {
            l1_rpc: Some("https://file.example".to_string()),
            er_rpc: Some("https://file-er.example".to_string()),
        };
        let config =
            EndpointConfig::resolve(Some("https://env.example".to_string()), None, Some(file));
        assert_eq!(config.l1_rpc, "https://env.example");
        assert_eq!(config.er_rpc, "https://file-er.example");
    }

    #[test]
    fn test_empty_values_fall_through() {
        let file = ProviderFile {
            l1_rpc: Some(String::new()),
            er_rpc: None,
        };
        let config = EndpointConfig::resolve(Some("  ".to_string()), None, Some(file));
        assert_eq!(config, EndpointConfig::default());
    }

    #[test]
    fn test_from_file_partial() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("providers.json");
        std::fs::write(&path, r#"{ "er_rpc": "http://localhost:7799" }"#).unwrap();

        let config = EndpointConfig::from_file(&path).unwrap();
        assert_eq!(config.l1_rpc, DEFAULT_L1_RPC);
        assert_eq!(config.er_rpc, "http://localhost:7799");
    }

    #[test]
    fn test_from_file_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("providers.json");
        std::fs::write(&path, "[1, 2").unwrap();
        assert!(EndpointConfig::from_file(&path).is_err());
    }
}
