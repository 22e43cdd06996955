//! Key-value backed DepartmentRepository implementation.
//!
//! Implements the domain-owned repository trait over any [`KeyValueStore`]
//! (dependency inversion). This is the sole mediator between department
//! entities and the store: it owns the keyspace convention, the wire codec,
//! uniqueness enforcement and locale-aware ordering.
//!
//! Known boundary condition: uniqueness is enforced by a read-check-write
//! sequence with no store-level transaction. The deployment model is a
//! single logical actor issuing one operation at a time, so the sequence
//! cannot interleave with itself; two independent actors sharing a store
//! could both pass the check and write. Multi-actor deployments need a
//! serialized write queue or an atomic uniqueness index at this boundary.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    collation::compare_names,
    domain::{
        Department, DepartmentId, DepartmentIdFactory, DepartmentName, DepartmentRepository,
        RepositoryError, RepositoryResult,
    },
    infrastructure::{dto::DepartmentRecord, store::KeyValueStore},
};

/// Keyspace prefix for department records.
///
/// Every key with this literal prefix is considered a department record;
/// no other prefix is read or written by this component.
pub const DEPARTMENT_KEY_PREFIX: &str = "department_";

/// Department repository over a flat asynchronous key-value store.
pub struct KvDepartmentRepository {
    store: Arc<dyn KeyValueStore>,
}

impl KvDepartmentRepository {
    /// Create a new repository over the given store.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Derive the storage key for a department id.
    fn key_for(id: &DepartmentId) -> String {
        format!("{DEPARTMENT_KEY_PREFIX}{id}")
    }

    async fn persist(&self, department: &Department) -> RepositoryResult<()> {
        let value = DepartmentRecord::encode(department)?;
        self.store
            .set(&Self::key_for(&department.id), &value)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl DepartmentRepository for KvDepartmentRepository {
    async fn list_all(&self) -> RepositoryResult<Vec<Department>> {
        let keys = self.store.all_keys().await?;
        let department_keys: Vec<String> = keys
            .into_iter()
            .filter(|key| key.starts_with(DEPARTMENT_KEY_PREFIX))
            .collect();

        let mut departments = Vec::with_capacity(department_keys.len());
        for (key, value) in self.store.multi_get(&department_keys).await? {
            let Some(value) = value else {
                warn!(%key, "department key vanished between enumeration and fetch");
                continue;
            };
            match DepartmentRecord::decode(&value) {
                Ok(department) => departments.push(department),
                // One corrupt record must not hide the rest of the list.
                Err(error) => warn!(%key, %error, "skipping malformed department record"),
            }
        }

        departments.sort_by(|a, b| {
            compare_names(a.name.as_str(), b.name.as_str())
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });

        Ok(departments)
    }

    async fn create(&self, raw_name: &str) -> RepositoryResult<Department> {
        let name = DepartmentName::new(raw_name)?;

        let existing = self.list_all().await?;
        if existing.iter().any(|d| d.name.folded() == name.folded()) {
            return Err(RepositoryError::DuplicateName {
                name: name.into_string(),
            });
        }

        let id = DepartmentIdFactory::generate()?;
        let department = Department::new(id, name);
        self.persist(&department).await?;
        debug!(id = %department.id, name = %department.name, "department created");

        Ok(department)
    }

    async fn update(
        &self,
        id: &DepartmentId,
        raw_new_name: &str,
    ) -> RepositoryResult<Department> {
        let name = DepartmentName::new(raw_new_name)?;

        let existing = self.list_all().await?;
        let current = existing
            .iter()
            .find(|d| &d.id == id)
            .ok_or_else(|| RepositoryError::NotFound {
                id: id.as_str().to_string(),
            })?;

        // The record being renamed is excluded from the duplicate check, so
        // renaming a department to its own (possibly re-cased) name succeeds.
        if existing
            .iter()
            .any(|d| &d.id != id && d.name.folded() == name.folded())
        {
            return Err(RepositoryError::DuplicateName {
                name: name.into_string(),
            });
        }

        let updated = current.renamed(name);
        self.persist(&updated).await?;
        debug!(id = %updated.id, name = %updated.name, "department renamed");

        Ok(updated)
    }

    async fn remove(&self, id: &DepartmentId) -> RepositoryResult<()> {
        // Removing an absent key is a no-op success; callers cannot
        // distinguish "already gone" from "just removed".
        self.store.remove(&Self::key_for(id)).await?;
        debug!(%id, "department removed");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::ValidationError,
        infrastructure::store::{InMemoryKeyValueStore, MockKeyValueStore, StorageError},
    };

    fn create_test_repository() -> (InMemoryKeyValueStore, KvDepartmentRepository) {
        let store = InMemoryKeyValueStore::new();
        let repository = KvDepartmentRepository::new(Arc::new(store.clone()));
        (store, repository)
    }

    #[tokio::test]
    async fn test_create_then_list_contains_trimmed_entry() {
        // given:
        let (store, repository) = create_test_repository();

        // when:
        let created = repository.create("  Engenharia  ").await.unwrap();

        // then:
        assert_eq!(created.name.as_str(), "Engenharia");
        let listed = repository.list_all().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], created);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_persists_legacy_wire_format() {
        // given:
        let (store, repository) = create_test_repository();

        // when:
        let created = repository.create("Engenharia").await.unwrap();

        // then: key is `department_<id>`, value carries the `nome` field
        let key = format!("{DEPARTMENT_KEY_PREFIX}{}", created.id);
        let values = store.multi_get(&[key.clone()]).await.unwrap();
        let raw = values[0].1.as_ref().expect("record must be stored");
        let value: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(value["id"], created.id.as_str());
        assert_eq!(value["nome"], "Engenharia");
    }

    #[tokio::test]
    async fn test_create_duplicate_name_rejected_store_unchanged() {
        // given:
        let (store, repository) = create_test_repository();
        repository.create("Engenharia").await.unwrap();

        // when: case/whitespace variant of an existing name
        let result = repository.create("engenharia ").await;

        // then: rejected, same key count as before
        assert!(matches!(
            result.unwrap_err(),
            RepositoryError::DuplicateName { name } if name == "engenharia"
        ));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_create_invalid_name_rejected_without_write() {
        // given:
        let (store, repository) = create_test_repository();

        // when: 3 characters after trimming
        let result = repository.create("  abc ").await;

        // then:
        assert!(matches!(
            result.unwrap_err(),
            RepositoryError::Validation(ValidationError::NameTooShort { min: 5, actual: 3 })
        ));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_list_all_sorted_locale_aware_regardless_of_insertion_order() {
        // given: inserted in reverse of the expected order
        let (_store, repository) = create_test_repository();
        repository.create("Zoologia").await.unwrap();
        repository.create("matemática").await.unwrap();
        repository.create("Engenharia").await.unwrap();

        // when:
        let listed = repository.list_all().await.unwrap();

        // then: locale-sorted, not byte-sorted
        let names: Vec<&str> = listed.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Engenharia", "matemática", "Zoologia"]);
    }

    #[tokio::test]
    async fn test_list_all_skips_malformed_record() {
        // given: one valid record and one corrupt value in the keyspace
        let (store, repository) = create_test_repository();
        repository.create("Engenharia").await.unwrap();
        store
            .set("department_corrupt", "{{{ not json")
            .await
            .unwrap();

        // when:
        let listed = repository.list_all().await.unwrap();

        // then: the corrupt record is skipped, not fatal
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name.as_str(), "Engenharia");
    }

    #[tokio::test]
    async fn test_list_all_ignores_foreign_keyspace() {
        // given: the store is shared with unrelated data
        let (store, repository) = create_test_repository();
        repository.create("Engenharia").await.unwrap();
        store
            .set("user_42", r#"{"id":"42","nome":"not a department"}"#)
            .await
            .unwrap();

        // when:
        let listed = repository.list_all().await.unwrap();

        // then:
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_update_own_name_recased_succeeds() {
        // given:
        let (_store, repository) = create_test_repository();
        let created = repository.create("Engenharia").await.unwrap();

        // when: renaming to the same name with different casing
        let updated = repository.update(&created.id, "ENGENHARIA").await.unwrap();

        // then: no spurious duplicate rejection, id preserved
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name.as_str(), "ENGENHARIA");
        let listed = repository.list_all().await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_update_to_other_departments_name_rejected() {
        // given:
        let (_store, repository) = create_test_repository();
        let engenharia = repository.create("Engenharia").await.unwrap();
        repository.create("Zoologia").await.unwrap();

        // when:
        let result = repository.update(&engenharia.id, "Zoologia").await;

        // then: rejected and the original name is unmodified
        assert!(matches!(
            result.unwrap_err(),
            RepositoryError::DuplicateName { .. }
        ));
        let listed = repository.list_all().await.unwrap();
        let names: Vec<&str> = listed.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Engenharia", "Zoologia"]);
    }

    #[tokio::test]
    async fn test_update_missing_id_not_found() {
        // given:
        let (_store, repository) = create_test_repository();
        let missing = DepartmentId::new("1733000000000-missing".to_string()).unwrap();

        // when:
        let result = repository.update(&missing, "Engenharia").await;

        // then:
        assert!(matches!(
            result.unwrap_err(),
            RepositoryError::NotFound { id } if id == "1733000000000-missing"
        ));
    }

    #[tokio::test]
    async fn test_update_overwrites_in_place() {
        // given:
        let (store, repository) = create_test_repository();
        let created = repository.create("Engenharia").await.unwrap();

        // when:
        repository.update(&created.id, "Matemática").await.unwrap();

        // then: one key overwritten, none added or removed
        assert_eq!(store.len().await, 1);
        let listed = repository.list_all().await.unwrap();
        assert_eq!(listed[0].id, created.id);
        assert_eq!(listed[0].name.as_str(), "Matemática");
    }

    #[tokio::test]
    async fn test_remove_missing_id_is_noop_success() {
        // given:
        let (_store, repository) = create_test_repository();
        repository.create("Engenharia").await.unwrap();
        let missing = DepartmentId::new("1733000000000-missing".to_string()).unwrap();

        // when:
        let result = repository.remove(&missing).await;

        // then: idempotent success, listing unchanged
        assert!(result.is_ok());
        assert_eq!(repository.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_remove_deletes_record() {
        // given:
        let (store, repository) = create_test_repository();
        let created = repository.create("Engenharia").await.unwrap();

        // when:
        repository.remove(&created.id).await.unwrap();

        // then:
        assert!(store.is_empty().await);
        assert!(repository.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_storage_error_is_surfaced_as_is() {
        // given: a store whose key enumeration fails outright
        let mut mock_store = MockKeyValueStore::new();
        mock_store
            .expect_all_keys()
            .returning(|| Err(StorageError::Backend("disk failure".to_string())));
        let repository = KvDepartmentRepository::new(Arc::new(mock_store));

        // when:
        let result = repository.list_all().await;

        // then: no retry, no masking
        assert!(matches!(
            result.unwrap_err(),
            RepositoryError::Storage(StorageError::Backend(message)) if message == "disk failure"
        ));
    }
}
