//! Data transfer objects for persisted department records.
//!
//! The value layout `{"id": "<id>", "nome": "<name>"}` is the compatibility
//! surface shared with records already written by the mobile app. The stored
//! field is literally `nome`; do not rename it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Department, DepartmentId, DepartmentName, ValidationError};

/// Persisted wire format for a single department record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentRecord {
    /// Department identifier
    pub id: String,
    /// Department name, stored under the legacy `nome` field
    #[serde(rename = "nome")]
    pub name: String,
}

/// Errors raised while decoding a stored record into a domain entity.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The stored value is not valid JSON for a department record
    #[error("invalid department record JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The stored fields do not satisfy domain validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl DepartmentRecord {
    /// Build a record from a domain entity.
    pub fn from_entity(department: &Department) -> Self {
        Self {
            id: department.id.as_str().to_string(),
            name: department.name.as_str().to_string(),
        }
    }

    /// Serialize a domain entity into the stored JSON form.
    pub fn encode(department: &Department) -> Result<String, serde_json::Error> {
        serde_json::to_string(&Self::from_entity(department))
    }

    /// Parse a stored JSON value into a validated domain entity.
    ///
    /// The name goes back through [`DepartmentName::new`], which re-trims
    /// and re-validates, so invalid persisted state is rejected here instead
    /// of leaking into the domain.
    pub fn decode(raw: &str) -> Result<Department, RecordError> {
        let record: DepartmentRecord = serde_json::from_str(raw)?;
        let id = DepartmentId::new(record.id)?;
        let name = DepartmentName::new(&record.name)?;
        Ok(Department::new(id, name))
    }
}
