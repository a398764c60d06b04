//! # Wallet Session Library
//!
//! Owns the single wallet handle of the marketplace and its connection state.
//!
//! ## Architecture
//!
//! ```text
//!  AdapterFactory ──create(provider_url, endpoint, SignalSender)──► WalletAdapter
//!                                                                       │
//!                         connect / disconnect signals (tagged with     │
//!                         the handle's generation)                      ▼
//!  WalletSession ◄──────────────── async-channel ◄──────────────── SignalSender
//!       │  Disconnected ⇄ Connected
//!       ├─► KeyValueStore  (walletProvider, feeDiscountKey)
//!       └─► Notifier       ("Wallet update" toasts)
//! ```
//!
//! The session is the only consumer of the channel and the only mutator of
//! its state. Replacing the provider URL or the endpoint tears the handle
//! down and builds a new one under a fresh generation; signals still queued
//! for an older generation are dropped as stale.
//!
//! [`WalletScope`] stands in for an ambient context: components receive the
//! scope by reference and ask it for the session via [`WalletScope::use_wallet`],
//! which fails with [`WalletError::MissingContext`] when nothing was provided.

pub mod adapter;
pub mod error;
pub mod notify;
pub mod provider;
pub mod scope;
pub mod session;

pub use adapter::{AdapterFactory, SignalSender, WalletAdapter, WalletSignal};
pub use error::WalletError;
pub use notify::{LogNotifier, Notifier};
pub use provider::{provider_name, ProviderChoice, DEFAULT_PROVIDER_URL, WALLET_PROVIDERS};
pub use scope::{UseWallet, WalletScope};
pub use session::{SessionState, SignalOutcome, WalletSession};
