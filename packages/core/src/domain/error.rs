//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to department validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty or whitespace only
    #[error("department name cannot be empty or whitespace only")]
    NameEmpty,

    /// Name too short error
    #[error("department name must be at least {min} characters (got {actual})")]
    NameTooShort { min: usize, actual: usize },

    /// Name too long error
    #[error("department name cannot exceed {max} characters (got {actual})")]
    NameTooLong { max: usize, actual: usize },

    /// DepartmentId validation error
    #[error("department id cannot be empty")]
    IdEmpty,
}
