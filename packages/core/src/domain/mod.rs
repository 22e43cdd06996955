//! Domain layer for the department registry.
//!
//! This module contains business logic that is independent of
//! data transfer objects (DTOs) and infrastructure concerns.

pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod value_object;

pub use entity::Department;
pub use error::ValidationError;
pub use factory::DepartmentIdFactory;
pub use repository::{DepartmentRepository, RepositoryError, RepositoryResult};
pub use value_object::{DepartmentId, DepartmentName, NAME_MAX_CHARS, NAME_MIN_CHARS};

#[cfg(test)]
pub use repository::MockDepartmentRepository;
