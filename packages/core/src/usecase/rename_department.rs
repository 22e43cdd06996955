//! UseCase: department rename (edit modal).

use std::sync::Arc;

use crate::domain::{Department, DepartmentId, DepartmentRepository, RepositoryResult};

/// UseCase backing the edit modal on the department list screen.
pub struct RenameDepartmentUseCase {
    /// Repository (data access abstraction)
    repository: Arc<dyn DepartmentRepository>,
}

impl RenameDepartmentUseCase {
    /// Create a new RenameDepartmentUseCase
    pub fn new(repository: Arc<dyn DepartmentRepository>) -> Self {
        Self { repository }
    }

    /// Rename the department with the given id.
    ///
    /// Saving the modal with the name unchanged (or merely re-cased) is a
    /// valid no-op rename and succeeds.
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier of the department being edited
    /// * `raw_new_name` - Candidate name as typed in the modal
    ///
    /// # Returns
    ///
    /// * `Ok(Department)` - the updated department
    /// * `Err(RepositoryError)` - validation failure, duplicate name,
    ///   unknown id or storage failure
    pub async fn execute(
        &self,
        id: &DepartmentId,
        raw_new_name: &str,
    ) -> RepositoryResult<Department> {
        self.repository.update(id, raw_new_name).await
    }
}
