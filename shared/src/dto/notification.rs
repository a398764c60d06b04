//! Toast notifications.

use serde::{Deserialize, Serialize};

/// Headline used for every wallet connection notification.
pub const WALLET_UPDATE: &str = "Wallet update";

/// A user-visible notification: a short headline plus a longer description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub description: String,
}

impl Notification {
    pub fn new(message: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            description: description.into(),
        }
    }

    /// Notification emitted when a wallet connects; `display_key` is already abbreviated.
    pub fn wallet_connected(display_key: &str) -> Self {
        Self::new(WALLET_UPDATE, format!("Connected to wallet {display_key}"))
    }

    pub fn wallet_disconnected() -> Self {
        Self::new(WALLET_UPDATE, "Disconnected from wallet")
    }
}
