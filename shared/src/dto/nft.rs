//! NFT descriptors and the panels shown on the home page.

use serde::{Deserialize, Serialize};

/// Maximum number of NFTs a home page panel displays.
pub const HOME_PANEL_LIMIT: usize = 3;

/// Title of the home page panel listing redeemable NFTs.
pub const REDEEMABLE_PANEL_TITLE: &str = "Redeemable";

/// Title of the home page panel listing digital-only NFTs.
pub const DIGITAL_PANEL_TITLE: &str = "Digital NFTS";

/// A single NFT listed on the marketplace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NftDescriptor {
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
    /// Listing price in USDC
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Mint address (base58)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mint: Option<String>,
    #[serde(default)]
    pub redeemable: bool,
}

impl NftDescriptor {
    /// Descriptor carrying only a name, mostly useful in tests.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            image: String::new(),
            description: String::new(),
            price: None,
            mint: None,
            redeemable: false,
        }
    }
}

/// A titled panel holding at most [`HOME_PANEL_LIMIT`] NFTs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HomePanel {
    pub title: String,
    pub items: Vec<NftDescriptor>,
}

impl HomePanel {
    /// Build a panel from the first [`HOME_PANEL_LIMIT`] items of `items`, in order.
    pub fn capped(title: impl Into<String>, items: Vec<NftDescriptor>) -> Self {
        Self::with_limit(title, items, HOME_PANEL_LIMIT)
    }

    pub fn with_limit(title: impl Into<String>, mut items: Vec<NftDescriptor>, limit: usize) -> Self {
        items.truncate(limit);
        Self {
            title: title.into(),
            items,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The two panels of the home page: redeemable first, digital second.
pub fn home_panels(redeemable: Vec<NftDescriptor>, digital: Vec<NftDescriptor>) -> [HomePanel; 2] {
    [
        HomePanel::capped(REDEEMABLE_PANEL_TITLE, redeemable),
        HomePanel::capped(DIGITAL_PANEL_TITLE, digital),
    ]
}
