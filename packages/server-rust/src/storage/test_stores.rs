//! Store doubles shared by the service tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use super::HashMapStore;
use crate::traits::StateStore;

/// In-memory store that counts reads and writes.
#[derive(Default)]
pub(crate) struct CountingStore {
    pub(crate) inner: HashMapStore,
    gets: AtomicUsize,
    puts: AtomicUsize,
}

impl CountingStore {
    pub(crate) fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub(crate) fn puts(&self) -> usize {
        self.puts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StateStore for CountingStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Bytes>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: Bytes) -> anyhow::Result<()> {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.inner.put(key, value).await
    }
}

/// Every call fails.
pub(crate) struct UnavailableStore;

#[async_trait]
impl StateStore for UnavailableStore {
    async fn get(&self, _key: &str) -> anyhow::Result<Option<Bytes>> {
        anyhow::bail!("store unavailable")
    }

    async fn put(&self, _key: &str, _value: Bytes) -> anyhow::Result<()> {
        anyhow::bail!("store unavailable")
    }
}

/// Reads succeed from `inner`; every write is rejected.
#[derive(Default)]
pub(crate) struct ReadOnlyStore {
    pub(crate) inner: HashMapStore,
}

#[async_trait]
impl StateStore for ReadOnlyStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Bytes>> {
        self.inner.get(key).await
    }

    async fn put(&self, _key: &str, _value: Bytes) -> anyhow::Result<()> {
        anyhow::bail!("write quorum lost")
    }
}

/// Commits each write immediately, then waits `ack_delay` before
/// acknowledging it.
pub(crate) struct SlowAckStore {
    pub(crate) inner: HashMapStore,
    pub(crate) ack_delay: Duration,
}

#[async_trait]
impl StateStore for SlowAckStore {
    async fn get(&self, key: &str) -> anyhow::Result<Option<Bytes>> {
        self.inner.get(key).await
    }

    async fn put(&self, key: &str, value: Bytes) -> anyhow::Result<()> {
        self.inner.put(key, value).await?;
        tokio::time::sleep(self.ack_delay).await;
        Ok(())
    }
}
