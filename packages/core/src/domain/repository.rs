//! Repository contract for department persistence.
//!
//! The trait lives in the domain layer and is implemented by the
//! infrastructure layer (dependency inversion), so use cases depend only on
//! this abstraction.

use async_trait::async_trait;
use thiserror::Error;

use super::{entity::Department, error::ValidationError, value_object::DepartmentId};
use crate::infrastructure::store::StorageError;

/// Result alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors surfaced by repository operations.
///
/// All variants are recoverable from the caller's point of view: validation
/// and duplicate errors leave the store untouched, and storage errors are
/// propagated as-is without automatic retries.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Candidate name failed validation; no state change
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another department already holds this name (after trim + case fold)
    #[error("a department named \"{name}\" already exists")]
    DuplicateName { name: String },

    /// No department is stored under this id
    #[error("department not found: {id}")]
    NotFound { id: String },

    /// A record could not be encoded for persistence
    #[error("failed to encode department record: {0}")]
    Codec(#[from] serde_json::Error),

    /// The underlying key-value store failed
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Repository interface for department CRUD operations.
///
/// Implementations re-read the store on every call; nothing is cached
/// across operations, so staleness is bounded by call latency only.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DepartmentRepository: Send + Sync {
    /// List every department, sorted ascending by locale-aware name
    /// comparison, ties broken by id. Malformed stored records are skipped
    /// rather than failing the whole listing (partial result contract).
    async fn list_all(&self) -> RepositoryResult<Vec<Department>>;

    /// Create a department from a raw candidate name.
    ///
    /// Trims and validates the name, rejects duplicates (trim + case fold)
    /// and persists one new record. Returns the created department.
    async fn create(&self, raw_name: &str) -> RepositoryResult<Department>;

    /// Rename the department stored under `id`.
    ///
    /// The duplicate check excludes the record being updated, so renaming a
    /// department to its own (possibly re-cased) name succeeds. Overwrites
    /// the record in place, preserving the id.
    async fn update(&self, id: &DepartmentId, raw_new_name: &str)
    -> RepositoryResult<Department>;

    /// Delete the department stored under `id`.
    ///
    /// Removing an id that is not present is a no-op success (idempotent).
    async fn remove(&self, id: &DepartmentId) -> RepositoryResult<()>;
}
