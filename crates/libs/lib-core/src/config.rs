//! # Application Configuration
//!
//! Native configuration loaded from environment variables (after `.env` via
//! `dotenvy`). The browser build does not use this module; it keeps its
//! settings in localStorage through [`crate::store::KeyValueStore`].
//!
//! ## Variables
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `SOLANA_NETWORK` | `mainnet-beta` | Named cluster used when no RPC URL is given |
//! | `SOLANA_RPC_URL` | unset | Explicit JSON-RPC endpoint, overrides the network |
//! | `MARKETPLACE_STORE_PATH` | `data/marketplace.json` | File backing the key-value store |
//!
//! ## Global Config Access
//!
//! ```rust,no_run
//! use lib_core::config::{init_config, core_config};
//!
//! init_config().expect("invalid configuration");
//! let network = &core_config().network;
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

use lib_utils::envs::{get_env_opt, get_env_or};

use crate::error::{AppError, Result};

pub const DEFAULT_NETWORK: &str = "mainnet-beta";
pub const DEFAULT_STORE_PATH: &str = "data/marketplace.json";

/// Application configuration loaded from environment variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Named Solana cluster (`mainnet-beta`, `devnet`, `localnet`)
    pub network: String,

    /// Explicit RPC endpoint; takes precedence over `network`
    pub rpc_url: Option<String>,

    /// Path of the JSON file backing the native key-value store
    pub store_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_string(),
            rpc_url: None,
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            network: get_env_or("SOLANA_NETWORK", DEFAULT_NETWORK),
            rpc_url: get_env_opt("SOLANA_RPC_URL"),
            store_path: PathBuf::from(get_env_or("MARKETPLACE_STORE_PATH", DEFAULT_STORE_PATH)),
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.network.trim().is_empty() {
            return Err(AppError::Config("SOLANA_NETWORK must not be empty".to_string()));
        }

        if let Some(url) = &self.rpc_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Config(format!(
                    "SOLANA_RPC_URL must be an http(s) URL, got {url}"
                )));
            }
        }

        if self.store_path.as_os_str().is_empty() {
            return Err(AppError::Config("MARKETPLACE_STORE_PATH must not be empty".to_string()));
        }

        Ok(())
    }
}

/// Global configuration instance (initialized once at startup).
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Initialize the global configuration from the environment.
///
/// # Errors
///
/// Fails when validation fails or the config was already initialized.
pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    CONFIG
        .set(config)
        .map_err(|_| AppError::Config("Config has already been initialized".to_string()))
}

/// Get a reference to the global configuration.
///
/// # Panics
///
/// Panics if [`init_config()`] has not been called yet.
pub fn core_config() -> &'static Config {
    CONFIG.get().expect("Config must be initialized with init_config() before use")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert_eq!(config.network, "mainnet-beta");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_non_http_rpc_url() {
        let config = Config {
            rpc_url: Some("ws://127.0.0.1:8900".to_string()),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_rejects_blank_network() {
        let config = Config {
            network: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
