//! UI Components

pub mod navbar;
pub mod nft_panel;
pub mod notifications;

pub use navbar::Navbar;
pub use nft_panel::{NftCard, NftPanel};
pub use notifications::Toasts;
