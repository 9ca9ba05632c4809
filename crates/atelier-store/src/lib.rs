//! Atelier Store
//!
//! Key-value persistence seam for the accessibility engine. The engine
//! talks to a `KeyValueStore` the way a page talks to localStorage: string
//! keys, string values, failures surfaced as recoverable errors so the
//! caller can keep running on in-memory state.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Storage error
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Backing store cannot be reached (privacy mode, detached volume)
    #[error("store unavailable")]
    Unavailable,

    /// Write rejected because the backing store is full
    #[error("store quota exceeded")]
    QuotaExceeded,

    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// String key-value store with durable intent
///
/// `get` on a missing key is `Ok(None)`, not an error. Implementations
/// must make a completed `set` visible to the next `get` on the same
/// instance.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}
