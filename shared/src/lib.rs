//! # Shared Data Transfer Objects Library
//!
//! Types shared between the marketplace frontend, the wallet session library and
//! the native tooling. Everything here is plain data plus a few display helpers,
//! so the crate builds for both native targets and `wasm32-unknown-unknown`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects
//!   - **[`dto::nft`]**: NFT descriptors and the capped home page panels
//!   - **[`dto::notification`]**: User-facing toast notifications
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::abbreviate_public_key`]**: The abbreviation used in wallet notifications
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - Optional fields are omitted from JSON when `None`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::nft::{NftDescriptor, HomePanel};
//! use shared::utils::abbreviate_public_key;
//!
//! let panel = HomePanel::capped("Redeemable", vec![NftDescriptor::named("Sneakers")]);
//! assert_eq!(panel.items.len(), 1);
//!
//! let display = abbreviate_public_key("8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL");
//! assert_eq!(display, "8W6Qgin.....SKuJKAL");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library and all exports are public API
pub use dto::*;
pub use utils::*;
