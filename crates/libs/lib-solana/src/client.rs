//! # Solana RPC Client
//!
//! Cluster selection plus a reqwest-backed [`RpcTransport`].
//!
//! ## Networks
//!
//! | Name | Endpoint |
//! |---|---|
//! | `mainnet-beta` | `https://solana-api.projectserum.com` |
//! | `devnet` | `https://api.devnet.solana.com` |
//! | `localnet` | `http://127.0.0.1:8899` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use lib_solana::client::{HttpRpcClient, Network};
//! use lib_solana::spl_token::get_program_accounts;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = HttpRpcClient::builder().network(Network::Devnet).build()?;
//! let owner = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL".parse()?;
//! let accounts = get_program_accounts(&client, &owner).await?;
//! println!("{accounts}");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::str::FromStr;

use lib_core::{AppError, Config};

/// Solana cluster selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    /// Production cluster
    MainnetBeta,
    /// Public test cluster
    Devnet,
    /// `solana-test-validator` on this machine
    Localnet,
}

impl Network {
    pub const ALL: [Network; 3] = [Network::MainnetBeta, Network::Devnet, Network::Localnet];

    pub fn name(&self) -> &'static str {
        match self {
            Network::MainnetBeta => "mainnet-beta",
            Network::Devnet => "devnet",
            Network::Localnet => "localnet",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Network::MainnetBeta => "https://solana-api.projectserum.com",
            Network::Devnet => "https://api.devnet.solana.com",
            Network::Localnet => "http://127.0.0.1:8899",
        }
    }

    /// Network whose endpoint is exactly `url`, if any.
    pub fn from_endpoint(url: &str) -> Option<Network> {
        Self::ALL.into_iter().find(|n| n.endpoint() == url)
    }
}

impl Default for Network {
    fn default() -> Self {
        Network::MainnetBeta
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet-beta" | "mainnet" => Ok(Network::MainnetBeta),
            "devnet" => Ok(Network::Devnet),
            "localnet" | "localhost" => Ok(Network::Localnet),
            other => Err(AppError::Config(format!("unknown Solana network: {other}"))),
        }
    }
}

/// Endpoint for a loaded configuration: explicit URL first, then the network.
pub fn resolve_endpoint(config: &Config) -> Result<String, AppError> {
    match &config.rpc_url {
        Some(url) => Ok(url.clone()),
        None => Ok(config.network.parse::<Network>()?.endpoint().to_string()),
    }
}

#[cfg(feature = "http")]
pub use http::{HttpRpcClient, HttpRpcClientBuilder};

#[cfg(feature = "http")]
mod http {
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::Value;
    use tracing::{debug, warn};

    use super::Network;
    use crate::rpc::{decode_response, RequestIds, RpcError, RpcRequest, RpcTransport};

    const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// JSON-RPC over HTTP POST using `reqwest`.
    #[derive(Debug)]
    pub struct HttpRpcClient {
        http: reqwest::Client,
        endpoint: String,
        ids: RequestIds,
    }

    /// Builder for configuring [`HttpRpcClient`].
    #[derive(Debug, Clone, Default)]
    pub struct HttpRpcClientBuilder {
        network: Option<Network>,
        custom_rpc_url: Option<String>,
        timeout: Option<Duration>,
    }

    impl HttpRpcClientBuilder {
        pub fn network(mut self, network: Network) -> Self {
            self.network = Some(network);
            self
        }

        /// Set a custom RPC URL (overrides the network).
        pub fn custom_rpc_url(mut self, url: impl Into<String>) -> Self {
            self.custom_rpc_url = Some(url.into());
            self
        }

        pub fn timeout(mut self, timeout: Duration) -> Self {
            self.timeout = Some(timeout);
            self
        }

        pub fn build(self) -> Result<HttpRpcClient, RpcError> {
            let endpoint = self
                .custom_rpc_url
                .unwrap_or_else(|| self.network.unwrap_or_default().endpoint().to_string());

            let http = reqwest::Client::builder()
                .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
                .build()
                .map_err(|e| RpcError::Transport(e.to_string()))?;

            Ok(HttpRpcClient {
                http,
                endpoint,
                ids: RequestIds::default(),
            })
        }
    }

    impl HttpRpcClient {
        pub fn builder() -> HttpRpcClientBuilder {
            HttpRpcClientBuilder::default()
        }

        pub fn new(endpoint: impl Into<String>) -> Result<Self, RpcError> {
            Self::builder().custom_rpc_url(endpoint).build()
        }

        pub fn endpoint(&self) -> &str {
            &self.endpoint
        }
    }

    #[async_trait(?Send)]
    impl RpcTransport for HttpRpcClient {
        async fn send(&self, method: &str, params: Value) -> Result<Value, RpcError> {
            let request = RpcRequest::new(self.ids.next(), method, &params);
            debug!(endpoint = %self.endpoint, method, id = request.id, "Sending RPC request");

            let response = self
                .http
                .post(&self.endpoint)
                .json(&request)
                .send()
                .await
                .map_err(|e| RpcError::Transport(e.to_string()))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| RpcError::Transport(e.to_string()))?;

            if !status.is_success() {
                warn!(endpoint = %self.endpoint, method, status = status.as_u16(), "RPC request failed");
                return Err(RpcError::Http {
                    status: status.as_u16(),
                    body,
                });
            }

            decode_response(&body)
        }
    }
}
