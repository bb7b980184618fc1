//! In-memory [`StateStore`] implementation backed by [`DashMap`].
//!
//! Provides concurrent read/write access without external locking. Writes
//! to the same key are last-write-wins; there is no compare-and-swap.

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use crate::traits::StateStore;

/// In-memory state backed by [`DashMap`].
pub struct HashMapStore {
    entries: DashMap<String, Bytes>,
}

impl HashMapStore {
    /// Creates a new, empty `HashMapStore`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Return the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HashMapStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateStore for HashMapStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Bytes>> {
        Ok(self.entries.get(key).map(|v| v.value().clone()))
    }

    async fn put(&self, key: &str, value: Bytes) -> anyhow::Result<()> {
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trip() {
        let store = HashMapStore::new();
        store.put("key1", Bytes::from_static(b"v1")).await.unwrap();

        let fetched = store.get("key1").await.unwrap();
        assert_eq!(fetched, Some(Bytes::from_static(b"v1")));
    }

    #[tokio::test]
    async fn get_missing_key_is_none() {
        let store = HashMapStore::new();
        assert!(store.get("missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_replaces_previous_value() {
        let store = HashMapStore::new();
        store.put("k", Bytes::from_static(b"first")).await.unwrap();
        store.put("k", Bytes::from_static(b"second")).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get("k").await.unwrap(),
            Some(Bytes::from_static(b"second"))
        );
    }

    #[tokio::test]
    async fn len_and_is_empty_reflect_state() {
        let store = HashMapStore::new();
        assert!(store.is_empty());

        store.put("a", Bytes::new()).await.unwrap();
        store.put("b", Bytes::new()).await.unwrap();

        assert!(!store.is_empty());
        assert_eq!(store.len(), 2);
    }
}
