//! Asynchronous slot persistence.
//!
//! Saving a note stands in for a remote write (the demo pretended to write to
//! a chain). [`NotePersistence`] is that collaborator: every call is async and
//! resolves to a success or failure outcome. [`SlotPersistence`] is the
//! implementation over a local [`KeyValueStore`], with an optional simulated
//! delay per call.

use std::future::Future;
use std::time::Duration;

use crate::error::{NotepadError, Result};
use crate::identity::WalletAddress;
use crate::storage::{KeyValueStore, NoteRecord};

/// Prefix of every note slot key.
pub const SLOT_PREFIX: &str = "savedNote";

/// The slot owned by `address`: `savedNote:<lowercase address>`.
pub fn slot_key(address: &WalletAddress) -> String {
    format!("{}:{}", SLOT_PREFIX, address.normalized())
}

/// Asynchronous persistence for one record per slot.
///
/// Implementations must give last-write-wins semantics per slot. Nothing is
/// retried; a failed outcome is returned to the caller as-is.
pub trait NotePersistence: Send + Sync {
    /// Replace whatever is in `slot` with `record`.
    fn write(&mut self, slot: &str, record: &NoteRecord)
        -> impl Future<Output = Result<()>> + Send;

    /// Fetch the record in `slot`, or `None` if the slot is empty.
    fn read(&self, slot: &str) -> impl Future<Output = Result<Option<NoteRecord>>> + Send;

    /// Empty `slot`. Returns whether a record was removed.
    fn erase(&mut self, slot: &str) -> impl Future<Output = Result<bool>> + Send;
}

/// Artificial delays applied before each persistence call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Latency {
    pub write: Duration,
    pub read: Duration,
}

impl Latency {
    /// No delay at all.
    pub const NONE: Latency = Latency {
        write: Duration::ZERO,
        read: Duration::ZERO,
    };

    pub fn from_millis(write_ms: u64, read_ms: u64) -> Self {
        Self {
            write: Duration::from_millis(write_ms),
            read: Duration::from_millis(read_ms),
        }
    }
}

/// [`NotePersistence`] over a key-value store.
#[derive(Debug)]
pub struct SlotPersistence<S> {
    store: S,
    latency: Latency,
}

impl<S: KeyValueStore> SlotPersistence<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            latency: Latency::NONE,
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

async fn simulate(delay: Duration) {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
}

impl<S: KeyValueStore> NotePersistence for SlotPersistence<S> {
    async fn write(&mut self, slot: &str, record: &NoteRecord) -> Result<()> {
        simulate(self.latency.write).await;
        let json = record.to_json()?;
        self.store
            .set(slot, &json)
            .map_err(|e| NotepadError::Persistence(format!("write to {} failed: {}", slot, e)))?;
        tracing::debug!(slot, bytes = json.len(), "slot written");
        Ok(())
    }

    async fn read(&self, slot: &str) -> Result<Option<NoteRecord>> {
        simulate(self.latency.read).await;
        let value = self
            .store
            .get(slot)
            .map_err(|e| NotepadError::Persistence(format!("read of {} failed: {}", slot, e)))?;
        match value {
            Some(json) => NoteRecord::from_json(&json).map(Some),
            None => Ok(None),
        }
    }

    async fn erase(&mut self, slot: &str) -> Result<bool> {
        simulate(self.latency.write).await;
        self.store
            .delete(slot)
            .map_err(|e| NotepadError::Persistence(format!("erase of {} failed: {}", slot, e)))
    }
}
