//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ValidationError;

/// Minimum number of characters in a department name (after trimming)
pub const NAME_MIN_CHARS: usize = 5;

/// Maximum number of characters in a department name (after trimming)
pub const NAME_MAX_CHARS: usize = 30;

/// Department identifier value object.
///
/// Represents an opaque, immutable identifier assigned at creation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DepartmentId(String);

impl DepartmentId {
    /// Create a new DepartmentId.
    ///
    /// # Arguments
    ///
    /// * `id` - The identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the DepartmentId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValidationError> {
        if id.is_empty() {
            return Err(ValidationError::IdEmpty);
        }
        Ok(Self(id))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DepartmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Department name value object.
///
/// Construction trims the input and enforces the [`NAME_MIN_CHARS`],
/// [`NAME_MAX_CHARS`] character range. The trimmed form is the only form
/// ever stored or compared, so every path that builds a name goes through
/// [`DepartmentName::new`] — including values read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentName(String);

impl DepartmentName {
    /// Create a new DepartmentName from raw user input.
    ///
    /// # Arguments
    ///
    /// * `raw` - The candidate name; leading/trailing whitespace is ignored
    ///
    /// # Returns
    ///
    /// A Result containing the trimmed DepartmentName or an error if the
    /// trimmed name is empty or outside the allowed character range
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::NameEmpty);
        }
        // Unicode scalar count, not bytes: "matemática" is 10 characters.
        let len = trimmed.chars().count();
        if len < NAME_MIN_CHARS {
            return Err(ValidationError::NameTooShort {
                min: NAME_MIN_CHARS,
                actual: len,
            });
        }
        if len > NAME_MAX_CHARS {
            return Err(ValidationError::NameTooLong {
                max: NAME_MAX_CHARS,
                actual: len,
            });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Case-folded form used for uniqueness comparison only — never stored.
    pub fn folded(&self) -> String {
        self.0.to_lowercase()
    }
}

impl fmt::Display for DepartmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
