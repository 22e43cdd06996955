//! Key-value store port.
//!
//! The store is treated as an external primitive: a flat, asynchronous
//! key-value surface with no transactions and no secondary indexes. The
//! repository layer is its only consumer and never reads or writes keys
//! outside its own keyspace prefix.

use async_trait::async_trait;
use thiserror::Error;

pub mod in_memory;

pub use in_memory::InMemoryKeyValueStore;

/// Error from the underlying key-value backend (I/O, quota, corruption).
///
/// The repository surfaces these as-is and never retries automatically;
/// retry policy belongs to the presentation layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Generic backend failure with a human-readable cause
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Contract required from any key-value backend.
///
/// All operations are asynchronous and either complete or fail outright
/// with a [`StorageError`]; no timeouts or cancellation are modeled.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// List every key currently present in the store.
    async fn all_keys(&self) -> Result<Vec<String>, StorageError>;

    /// Fetch the values for the given keys in one call.
    ///
    /// Each result pairs the requested key with its value; a missing key
    /// yields `None` for that key, never an error.
    async fn multi_get(
        &self,
        keys: &[String],
    ) -> Result<Vec<(String, Option<String>)>, StorageError>;

    /// Set a single key's value, overwriting any existing value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a single key. Removing an absent key is a no-op success.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}
