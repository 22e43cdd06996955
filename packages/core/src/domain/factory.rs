//! Domain factories for creating domain entities and value objects.

use uuid::Uuid;

use super::{error::ValidationError, value_object::DepartmentId};
use crate::time::current_timestamp_millis;

/// Factory for generating DepartmentId instances.
///
/// Identifiers combine the creation timestamp with a random suffix:
/// `<unix_millis>-<uuid_v4>`. The timestamp keeps ids roughly chronological,
/// matching the records already persisted by older app versions, while the
/// UUID v4 suffix makes collisions structurally impossible even when two
/// creations observe the same millisecond.
pub struct DepartmentIdFactory;

impl DepartmentIdFactory {
    /// Generate a new DepartmentId.
    ///
    /// # Returns
    ///
    /// A Result containing a fresh DepartmentId
    ///
    /// # Errors
    ///
    /// This method should not fail in practice, but returns Result for
    /// consistency with the domain error handling pattern.
    pub fn generate() -> Result<DepartmentId, ValidationError> {
        let timestamp = current_timestamp_millis();
        let suffix = Uuid::new_v4().simple();
        DepartmentId::new(format!("{timestamp}-{suffix}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_id_factory_generate() {
        // when:
        let result = DepartmentIdFactory::generate();

        // then: "<millis>-<32 hex chars>"
        assert!(result.is_ok());
        let id = result.unwrap();
        let (timestamp, suffix) = id.as_str().split_once('-').unwrap();
        assert!(timestamp.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), 32);
    }

    #[test]
    fn test_department_id_factory_rapid_generation_is_collision_free() {
        // when: generate many ids within the same millisecond window
        let ids: Vec<String> = (0..1000)
            .map(|_| DepartmentIdFactory::generate().unwrap().into_string())
            .collect();

        // then: all distinct
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }
}
