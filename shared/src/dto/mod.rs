//! # Data Transfer Objects (DTOs)
//!
//! ## Module Organization
//!
//! - [`nft`] - NFT descriptors and home page panels
//! - [`notification`] - Toast notifications emitted by the wallet session
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "name": "Bonfida Hoodie",
//!   "image": "/assets/nfts/hoodie.png",
//!   "description": "Redeem for a physical hoodie",
//!   "price": 12.5,
//!   "mint": "4uDfUFmSHcQYKxpMHXTeKzM3BQKvq9Hzf2ZbKBsA3Ytm",
//!   "redeemable": true
//! }
//! ```

pub mod nft;
pub mod notification;

pub use nft::*;
pub use notification::*;
