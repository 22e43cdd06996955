//! UseCase: department creation.

use std::sync::Arc;

use crate::domain::{Department, DepartmentRepository, RepositoryResult};

/// UseCase backing the department creation screen.
pub struct CreateDepartmentUseCase {
    /// Repository (data access abstraction)
    repository: Arc<dyn DepartmentRepository>,
}

impl CreateDepartmentUseCase {
    /// Create a new CreateDepartmentUseCase
    pub fn new(repository: Arc<dyn DepartmentRepository>) -> Self {
        Self { repository }
    }

    /// Create a department from the raw form input.
    ///
    /// # Arguments
    ///
    /// * `raw_name` - Candidate name as typed by the user
    ///
    /// # Returns
    ///
    /// * `Ok(Department)` - the created department (the screen resets the
    ///   form and navigates back to the listing)
    /// * `Err(RepositoryError)` - validation failure, duplicate name or
    ///   storage failure; nothing was written
    pub async fn execute(&self, raw_name: &str) -> RepositoryResult<Department> {
        self.repository.create(raw_name).await
    }
}
