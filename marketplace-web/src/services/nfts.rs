//! Marketplace catalog.
//!
//! Listings are compiled in until the marketplace program exposes them
//! on-chain.

use shared::NftDescriptor;

fn listing(name: &str, image: &str, description: &str, price: f64, redeemable: bool) -> NftDescriptor {
    NftDescriptor {
        name: name.to_string(),
        image: format!("/assets/nfts/{image}"),
        description: description.to_string(),
        price: Some(price),
        mint: None,
        redeemable,
    }
}

/// NFTs that can be exchanged for a physical product.
pub fn get_redeemable_nft_list() -> Vec<NftDescriptor> {
    vec![
        listing("Bonfida Hoodie", "hoodie.png", "Heavyweight hoodie, shipped worldwide.", 80.0, true),
        listing("Serum Cap", "cap.png", "Embroidered cap.", 35.0, true),
        listing("Solana Mug", "mug.png", "Ceramic mug, 350 ml.", 20.0, true),
        listing("Hardware Wallet", "ledger.png", "Sealed hardware wallet.", 120.0, true),
        listing("Sticker Pack", "stickers.png", "Twelve vinyl stickers.", 8.0, true),
    ]
}

/// Digital-only collectibles.
pub fn get_non_redeemable_nft_list() -> Vec<NftDescriptor> {
    vec![
        listing("Wave #1", "wave-1.png", "First of the waves series.", 15.0, false),
        listing("Wave #2", "wave-2.png", "Second of the waves series.", 15.0, false),
        listing("Genesis Badge", "genesis.png", "Awarded to early marketplace users.", 50.0, false),
        listing("Pixel Fida", "pixel-fida.png", "8-bit mascot.", 10.0, false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{home_panels, HOME_PANEL_LIMIT};

    #[test]
    fn test_lists_are_split_by_redeemability() {
        assert!(get_redeemable_nft_list().iter().all(|n| n.redeemable));
        assert!(get_non_redeemable_nft_list().iter().all(|n| !n.redeemable));
    }

    #[test]
    fn test_home_panels_show_first_three() {
        let redeemable = get_redeemable_nft_list();
        let [first, second] = home_panels(redeemable.clone(), get_non_redeemable_nft_list());

        assert_eq!(first.title, "Redeemable");
        assert_eq!(first.items.len(), HOME_PANEL_LIMIT);
        assert_eq!(first.items[..], redeemable[..HOME_PANEL_LIMIT]);
        assert_eq!(second.title, "Digital NFTS");
        assert_eq!(second.items.len(), HOME_PANEL_LIMIT);
    }
}
