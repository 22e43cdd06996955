//! UseCase: department deletion (confirmation modal).

use std::sync::Arc;

use crate::domain::{DepartmentId, DepartmentRepository, RepositoryResult};

/// UseCase backing the delete confirmation modal.
pub struct DeleteDepartmentUseCase {
    /// Repository (data access abstraction)
    repository: Arc<dyn DepartmentRepository>,
}

impl DeleteDepartmentUseCase {
    /// Create a new DeleteDepartmentUseCase
    pub fn new(repository: Arc<dyn DepartmentRepository>) -> Self {
        Self { repository }
    }

    /// Delete the department with the given id.
    ///
    /// Deleting an id that is already gone succeeds; the caller cannot
    /// distinguish "already gone" from "just removed".
    ///
    /// # Arguments
    ///
    /// * `id` - Identifier of the department to delete
    ///
    /// # Returns
    ///
    /// * `Ok(())` - the record is no longer in the store
    /// * `Err(RepositoryError)` - storage failure
    pub async fn execute(&self, id: &DepartmentId) -> RepositoryResult<()> {
        self.repository.remove(id).await
    }
}
