//! Durable key-value blob storage.
//!
//! The cart survives process restarts by being written, whole, under a
//! single fixed key. The contract is deliberately small: read a blob,
//! replace a blob. A missing key is `Ok(None)`, never an error, and writes
//! either complete or fail loudly - there is no partial-write recovery.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when reading or writing the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Whole-blob key-value persistence.
///
/// Implementations must treat a missing key as `Ok(None)` and must not
/// return from `write` until the blob is durably replaced (or the failure
/// has been reported), so a crash immediately after a call cannot silently
/// lose state.
#[async_trait]
pub trait DurableStore: Send + Sync {
    /// Read the blob stored under `key`, if any.
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Replace the blob stored under `key`.
    async fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StoreError>;
}
