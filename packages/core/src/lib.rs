//! Department registry core library.
//!
//! This library provides the repository logic behind the department
//! management screens: keyspace convention, entity (de)serialization,
//! name uniqueness enforcement and locale-aware listing over a flat,
//! asynchronous key-value store.

pub mod collation;
pub mod domain;
pub mod infrastructure;
pub mod logger;
pub mod time;
pub mod usecase;

// Re-export the public surface
pub use domain::{
    Department, DepartmentId, DepartmentIdFactory, DepartmentName, DepartmentRepository,
    NAME_MAX_CHARS, NAME_MIN_CHARS, RepositoryError, RepositoryResult, ValidationError,
};
pub use infrastructure::dto::DepartmentRecord;
pub use infrastructure::repository::{DEPARTMENT_KEY_PREFIX, KvDepartmentRepository};
pub use infrastructure::store::{InMemoryKeyValueStore, KeyValueStore, StorageError};
pub use usecase::{
    CreateDepartmentUseCase, DeleteDepartmentUseCase, ListDepartmentsUseCase,
    RenameDepartmentUseCase,
};
