use async_trait::async_trait;
use bytes::Bytes;

/// Durable key-value state the registry reads and writes.
///
/// The backing ledger persists and replicates this state; the registry only
/// relies on read-your-writes within one operation and durability after a
/// successful `put`. Implementations: in-memory (tests, local driver).
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// `Ok(None)` means the key is absent; `Err` means the read itself failed.
    async fn get(&self, key: &str) -> anyhow::Result<Option<Bytes>>;

    /// Write `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: Bytes) -> anyhow::Result<()>;
}
