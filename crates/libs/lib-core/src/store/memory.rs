use std::collections::HashMap;

use parking_lot::Mutex;

use super::KeyValueStore;
use crate::error::Result;

/// In-process store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::WALLET_PROVIDER_KEY;

    #[test]
    fn test_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_get_or_treats_empty_as_absent() {
        let store = MemoryStore::with_entries([(WALLET_PROVIDER_KEY, "")]);
        assert_eq!(
            store.get_or(WALLET_PROVIDER_KEY, "https://www.sollet.io").unwrap(),
            "https://www.sollet.io"
        );
    }

    #[test]
    fn test_shared_through_references() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let handle = store.clone();
        handle.set("walletProvider", "https://www.bonfida.com/wallet").unwrap();
        assert_eq!(store.len(), 1);
    }
}
