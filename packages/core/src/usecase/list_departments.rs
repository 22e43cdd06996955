//! UseCase: department listing.

use std::sync::Arc;

use crate::domain::{Department, DepartmentRepository, RepositoryResult};

/// UseCase backing the department list screen.
pub struct ListDepartmentsUseCase {
    /// Repository (data access abstraction)
    repository: Arc<dyn DepartmentRepository>,
}

impl ListDepartmentsUseCase {
    /// Create a new ListDepartmentsUseCase
    pub fn new(repository: Arc<dyn DepartmentRepository>) -> Self {
        Self { repository }
    }

    /// Load every department, ready for rendering.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<Department>)` - departments sorted ascending by
    ///   locale-aware name comparison
    /// * `Err(RepositoryError)` - the store could not be read
    pub async fn execute(&self) -> RepositoryResult<Vec<Department>> {
        self.repository.list_all().await
    }
}
