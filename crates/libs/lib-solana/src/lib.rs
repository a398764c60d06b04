//! # Solana Library
//!
//! The slice of Solana the marketplace needs: base58 public keys, the cluster
//! endpoint table, a JSON-RPC transport seam, and the SPL token account query.
//!
//! ```text
//! get_program_accounts(owner)
//!        │
//!        ▼
//!  dyn RpcTransport ──► HttpRpcClient (reqwest, native, feature "http")
//!                  └──► GlooRpcTransport (gloo-net, marketplace-web)
//! ```

pub mod client;
pub mod rpc;
pub mod spl_token;
pub mod types;

pub use client::Network;
#[cfg(feature = "http")]
pub use client::{HttpRpcClient, HttpRpcClientBuilder};
pub use rpc::{RpcError, RpcTransport};
pub use spl_token::{get_program_accounts, TokenAccountInfo, TOKEN_PROGRAM_ID};
pub use types::{Pubkey, PubkeyError};
