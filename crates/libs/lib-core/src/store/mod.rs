//! # Key-Value Persistence
//!
//! A tiny string-to-string store with the same shape as the browser's
//! `localStorage`. The wallet session keeps its durable settings here.
//!
//! ## Implementations
//!
//! - [`MemoryStore`] - process-local, used in tests and as a fallback
//! - [`FileStore`] - JSON object file, survives restarts (native)
//! - `BrowserStore` in `marketplace-web` - the browser's `window.localStorage`
//!
//! Methods take `&self`; implementations use interior mutability so a store can
//! be shared between the session and the rest of the application.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::rc::Rc;
use std::sync::Arc;

use crate::error::Result;

/// Durable key of the selected wallet provider URL.
pub const WALLET_PROVIDER_KEY: &str = "walletProvider";

/// Cached fee-discount account, invalidated on every wallet connect/disconnect.
pub const FEE_DISCOUNT_KEY: &str = "feeDiscountKey";

/// Durable key of the selected RPC endpoint.
pub const CONNECTION_ENDPOINT_KEY: &str = "connectionEndpoint";

/// String key-value persistence.
pub trait KeyValueStore {
    /// Read a value. `Ok(None)` when the key is absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a key. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Read a value, treating absent and empty values as `default`.
    fn get_or(&self, key: &str, default: &str) -> Result<String> {
        Ok(self
            .get(key)?
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| default.to_string()))
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
