//! Core domain models for the department registry.

use serde::{Deserialize, Serialize};

use super::value_object::{DepartmentId, DepartmentName};

/// Represents a department record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department identifier, assigned at creation and immutable thereafter
    pub id: DepartmentId,
    /// Department name (trimmed)
    pub name: DepartmentName,
}

impl Department {
    /// Create a new department
    pub fn new(id: DepartmentId, name: DepartmentName) -> Self {
        Self { id, name }
    }

    /// Return a copy of this department with a new name, keeping the id
    pub fn renamed(&self, name: DepartmentName) -> Self {
        Self {
            id: self.id.clone(),
            name,
        }
    }
}
