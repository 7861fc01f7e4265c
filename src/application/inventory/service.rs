//! Inventory service: application-layer orchestration
//!
//! All cross-record invariants live here. HTTP handlers are thin wrappers that
//! delegate to this service, and repositories only store what they are given.
//!
//! Create and Update read the whole collection, decide, then write. Nothing
//! makes that sequence atomic unless the service was built with
//! [`InventoryService::with_serialized_writes`]; two concurrent creates with
//! the same uniqueness value can otherwise both succeed.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};
use tracing::{debug, info};

use crate::domain::{
    DomainError, DomainResult, Employee, Entity, Product, Repository, Section,
};

pub type EmployeeService = InventoryService<Employee>;
pub type SectionService = InventoryService<Section>;
pub type ProductService = InventoryService<Product>;

/// Domain service for one entity collection.
pub struct InventoryService<E: Entity> {
    repo: Arc<dyn Repository<E>>,
    write_lock: Option<Mutex<()>>,
}

impl<E: Entity> InventoryService<E> {
    pub fn new(repo: Arc<dyn Repository<E>>) -> Self {
        Self {
            repo,
            write_lock: None,
        }
    }

    /// Service whose Create and Update run one at a time.
    pub fn with_serialized_writes(repo: Arc<dyn Repository<E>>) -> Self {
        Self {
            repo,
            write_lock: Some(Mutex::new(())),
        }
    }

    pub fn serializes_writes(&self) -> bool {
        self.write_lock.is_some()
    }

    async fn lock_writes(&self) -> Option<MutexGuard<'_, ()>> {
        match &self.write_lock {
            Some(lock) => Some(lock.lock().await),
            None => None,
        }
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get_all(&self) -> DomainResult<Vec<E>> {
        self.repo.get_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> DomainResult<E> {
        self.repo.get_by_id(id).await
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Create a record with id = last id + 1.
    ///
    /// Fails with `Conflict` when the uniqueness field is already taken, in
    /// which case neither `last_id` nor `create` reach the repository.
    pub async fn create(&self, request: E::Create) -> DomainResult<E> {
        let _guard = self.lock_writes().await;

        let existing = self.repo.get_all().await?;
        let key = E::create_key(&request);
        if existing.iter().any(|record| record.unique_key() == key) {
            return Err(conflict::<E>(key));
        }

        let last_id = self.repo.last_id().await?;
        let next_id = last_id.checked_add(1).ok_or_else(|| {
            DomainError::Storage(format!("{} id space exhausted (last id {})", E::NAME, last_id))
        })?;
        let candidate = E::from_create(next_id, request);

        let created = self.repo.create(candidate).await?;
        info!(entity = E::NAME, id = created.id(), "Record created");
        Ok(created)
    }

    /// Merge `patch` into the record stored under `id`.
    ///
    /// The record's own current uniqueness value never counts as a collision.
    pub async fn update(&self, id: i32, patch: E::Patch) -> DomainResult<E> {
        let _guard = self.lock_writes().await;

        let existing = self.repo.get_all().await?;

        let mut record = existing
            .iter()
            .find(|record| record.id() == id)
            .cloned()
            .ok_or_else(|| DomainError::not_found(E::NAME, id))?;

        if let Some(key) = E::patch_key(&patch) {
            let taken = existing
                .iter()
                .any(|other| other.id() != id && other.unique_key() == key);
            if taken {
                return Err(conflict::<E>(key));
            }
        }

        record.merge(patch);

        let updated = self.repo.update(id, record).await?;
        info!(entity = E::NAME, id, "Record updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        self.repo.delete(id).await?;
        info!(entity = E::NAME, id, "Record deleted");
        Ok(())
    }
}

fn conflict<E: Entity>(key: &E::Key) -> DomainError {
    debug!(entity = E::NAME, field = E::UNIQUE_FIELD, value = %key, "Uniqueness conflict");
    metrics::counter!("inventory_conflicts_total", "entity" => E::NAME).increment(1);
    DomainError::conflict(E::NAME, E::UNIQUE_FIELD, key)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;

    use super::*;
    use crate::domain::{
        CreateEmployee, CreateProduct, CreateSection, EmployeePatch, ErrorKind, ProductPatch,
        SectionPatch,
    };
    use crate::infrastructure::storage::InMemoryRepository;

    /// Wraps the in-memory repository, counts calls and injects failures.
    struct RecordingRepository<E: Entity> {
        inner: InMemoryRepository<E>,
        get_all_calls: AtomicUsize,
        create_calls: AtomicUsize,
        update_calls: AtomicUsize,
        last_id_calls: AtomicUsize,
        fail_get_all: StdMutex<Option<DomainError>>,
        fail_last_id: StdMutex<Option<DomainError>>,
        fail_create: StdMutex<Option<DomainError>>,
        fail_update: StdMutex<Option<DomainError>>,
        fail_delete: StdMutex<Option<DomainError>>,
    }

    impl<E: Entity> RecordingRepository<E> {
        fn with_records(records: impl IntoIterator<Item = E>) -> Arc<Self> {
            Arc::new(Self {
                inner: InMemoryRepository::with_records(records),
                get_all_calls: AtomicUsize::new(0),
                create_calls: AtomicUsize::new(0),
                update_calls: AtomicUsize::new(0),
                last_id_calls: AtomicUsize::new(0),
                fail_get_all: StdMutex::new(None),
                fail_last_id: StdMutex::new(None),
                fail_create: StdMutex::new(None),
                fail_update: StdMutex::new(None),
                fail_delete: StdMutex::new(None),
            })
        }

        fn creates(&self) -> usize {
            self.create_calls.load(Ordering::SeqCst)
        }

        fn updates(&self) -> usize {
            self.update_calls.load(Ordering::SeqCst)
        }

        fn last_ids(&self) -> usize {
            self.last_id_calls.load(Ordering::SeqCst)
        }
    }

    fn injected(slot: &StdMutex<Option<DomainError>>) -> DomainResult<()> {
        match slot.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    #[async_trait]
    impl<E: Entity> Repository<E> for RecordingRepository<E> {
        async fn get_all(&self) -> DomainResult<Vec<E>> {
            self.get_all_calls.fetch_add(1, Ordering::SeqCst);
            injected(&self.fail_get_all)?;
            self.inner.get_all().await
        }

        async fn get_by_id(&self, id: i32) -> DomainResult<E> {
            self.inner.get_by_id(id).await
        }

        async fn create(&self, candidate: E) -> DomainResult<E> {
            self.create_calls.fetch_add(1, Ordering::SeqCst);
            injected(&self.fail_create)?;
            self.inner.create(candidate).await
        }

        async fn update(&self, id: i32, updated: E) -> DomainResult<E> {
            self.update_calls.fetch_add(1, Ordering::SeqCst);
            injected(&self.fail_update)?;
            self.inner.update(id, updated).await
        }

        async fn delete(&self, id: i32) -> DomainResult<()> {
            injected(&self.fail_delete)?;
            self.inner.delete(id).await
        }

        async fn last_id(&self) -> DomainResult<i32> {
            self.last_id_calls.fetch_add(1, Ordering::SeqCst);
            injected(&self.fail_last_id)?;
            self.inner.last_id().await
        }
    }

    fn employee(id: i32, card: &str) -> Employee {
        Employee {
            id,
            card_number_id: card.to_string(),
            first_name: "First".into(),
            last_name: "Last".into(),
            warehouse_id: 1,
        }
    }

    fn new_employee(card: &str) -> CreateEmployee {
        CreateEmployee {
            card_number_id: card.to_string(),
            first_name: "Rui".into(),
            last_name: "Costa".into(),
            warehouse_id: 2,
        }
    }

    fn service<E: Entity>(repo: &Arc<RecordingRepository<E>>) -> InventoryService<E> {
        InventoryService::new(repo.clone())
    }

    // ── Create ──────────────────────────────────────────────────

    #[tokio::test]
    async fn create_assigns_next_id() {
        let repo = RecordingRepository::with_records([employee(1, "AAA111222")]);
        let svc = service(&repo);

        let created = svc.create(new_employee("BBB333444")).await.unwrap();

        assert_eq!(created.id, 2);
        assert_eq!(created.card_number_id, "BBB333444");
        assert_eq!(repo.creates(), 1);
    }

    #[tokio::test]
    async fn create_after_max_id_fails_without_writing() {
        let repo = RecordingRepository::with_records([employee(i32::MAX, "AAA111222")]);

        let err = service(&repo)
            .create(new_employee("BBB333444"))
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Storage);
        assert_eq!(repo.last_ids(), 1);
        assert_eq!(repo.creates(), 0);
    }

    #[tokio::test]
    async fn create_in_empty_collection_gets_id_one() {
        let repo = RecordingRepository::<Employee>::with_records([]);
        let created = service(&repo).create(new_employee("AAA111222")).await.unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn create_uses_max_id_not_count() {
        let repo = RecordingRepository::with_records([
            employee(2, "AAA111222"),
            employee(9, "CCC555666"),
        ]);
        let created = service(&repo).create(new_employee("BBB333444")).await.unwrap();
        assert_eq!(created.id, 10);
    }

    #[tokio::test]
    async fn create_duplicate_key_conflicts_without_writing() {
        let repo = RecordingRepository::with_records([employee(1, "AAA111222")]);
        let svc = service(&repo);

        let err = svc.create(new_employee("AAA111222")).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert!(err.to_string().contains("card_number_id"));
        assert_eq!(repo.creates(), 0);
        assert_eq!(repo.last_ids(), 0);
    }

    #[tokio::test]
    async fn create_key_comparison_is_case_sensitive() {
        let repo = RecordingRepository::with_records([employee(1, "AAA111222")]);
        let created = service(&repo).create(new_employee("aaa111222")).await.unwrap();
        assert_eq!(created.id, 2);
    }

    #[tokio::test]
    async fn create_propagates_get_all_failure() {
        let repo = RecordingRepository::with_records([employee(1, "AAA111222")]);
        *repo.fail_get_all.lock().unwrap() = Some(DomainError::Storage("read failed".into()));

        let err = service(&repo).create(new_employee("BBB333444")).await.unwrap_err();

        assert_eq!(err, DomainError::Storage("read failed".into()));
        assert_eq!(repo.creates(), 0);
        assert_eq!(repo.last_ids(), 0);
    }

    #[tokio::test]
    async fn create_propagates_last_id_failure() {
        let repo = RecordingRepository::<Employee>::with_records([]);
        *repo.fail_last_id.lock().unwrap() = Some(DomainError::Storage("no file".into()));

        let err = service(&repo).create(new_employee("BBB333444")).await.unwrap_err();

        assert_eq!(err.to_string(), "no file");
        assert_eq!(repo.creates(), 0);
    }

    #[tokio::test]
    async fn create_surfaces_repository_rejection_verbatim() {
        let repo = RecordingRepository::<Employee>::with_records([]);
        let rejection = DomainError::conflict("Employee", "id", 1);
        *repo.fail_create.lock().unwrap() = Some(rejection.clone());

        let err = service(&repo).create(new_employee("BBB333444")).await.unwrap_err();

        assert_eq!(err, rejection);
        assert_eq!(repo.creates(), 1);
    }

    // ── Update ──────────────────────────────────────────────────

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let repo = RecordingRepository::with_records([employee(1, "AAA111222")]);
        let err = service(&repo)
            .update(5, EmployeePatch::default())
            .await
            .unwrap_err();

        assert_eq!(err, DomainError::not_found("Employee", 5));
        assert_eq!(repo.updates(), 0);
    }

    #[tokio::test]
    async fn update_colliding_with_other_record_conflicts() {
        let repo = RecordingRepository::with_records([
            employee(1, "AAA111222"),
            employee(2, "BBB333444"),
        ]);
        let patch = EmployeePatch {
            card_number_id: Some("BBB333444".into()),
            ..Default::default()
        };

        let err = service(&repo).update(1, patch).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(repo.updates(), 0);
    }

    #[tokio::test]
    async fn update_resubmitting_own_key_succeeds() {
        let repo = RecordingRepository::with_records([employee(1, "AAA111222")]);
        let patch = EmployeePatch {
            card_number_id: Some("AAA111222".into()),
            first_name: Some("New".into()),
            ..Default::default()
        };

        let updated = service(&repo).update(1, patch).await.unwrap();

        assert_eq!(updated.card_number_id, "AAA111222");
        assert_eq!(updated.first_name, "New");
        assert_eq!(updated.last_name, "Last");
        assert_eq!(repo.inner.get_by_id(1).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_without_key_skips_uniqueness_scan() {
        let repo = RecordingRepository::with_records([
            employee(1, "AAA111222"),
            employee(2, "BBB333444"),
        ]);
        let patch = EmployeePatch {
            warehouse_id: Some(7),
            ..Default::default()
        };

        let updated = service(&repo).update(2, patch).await.unwrap();

        assert_eq!(updated.warehouse_id, 7);
        assert_eq!(updated.card_number_id, "BBB333444");
    }

    #[tokio::test]
    async fn update_propagates_get_all_failure() {
        let repo = RecordingRepository::with_records([employee(1, "AAA111222")]);
        *repo.fail_get_all.lock().unwrap() = Some(DomainError::Storage("locked".into()));

        let err = service(&repo)
            .update(1, EmployeePatch::default())
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Storage);
        assert_eq!(repo.updates(), 0);
    }

    #[tokio::test]
    async fn section_update_can_set_zero_explicitly() {
        let section = Section {
            id: 1,
            section_number: 10,
            current_temperature: 4,
            minimum_temperature: -5,
            current_capacity: 30,
            minimum_capacity: 5,
            maximum_capacity: 50,
            warehouse_id: 1,
            product_type_id: 1,
        };
        let repo = RecordingRepository::with_records([section]);
        let patch = SectionPatch {
            current_temperature: Some(0),
            ..Default::default()
        };

        let updated = service(&repo).update(1, patch).await.unwrap();

        assert_eq!(updated.current_temperature, 0);
        assert_eq!(updated.minimum_temperature, -5);
    }

    #[tokio::test]
    async fn section_numbers_must_be_unique() {
        let repo = RecordingRepository::<Section>::with_records([]);
        let svc = service(&repo);
        let request = CreateSection {
            section_number: 3,
            current_temperature: 1,
            minimum_temperature: -1,
            current_capacity: 10,
            minimum_capacity: 1,
            maximum_capacity: 20,
            warehouse_id: 1,
            product_type_id: 1,
        };

        svc.create(request.clone()).await.unwrap();
        let err = svc.create(request).await.unwrap_err();

        assert_eq!(
            err,
            DomainError::conflict("Section", "section_number", 3)
        );
    }

    #[tokio::test]
    async fn product_codes_must_be_unique_on_update() {
        let repo = RecordingRepository::<Product>::with_records([]);
        let svc = service(&repo);
        let request = |code: &str| CreateProduct {
            description: "frozen".into(),
            expiration_rate: 1,
            freezing_rate: 2,
            height: 3.3,
            length: 4.3,
            net_weight: 5.5,
            product_code: code.into(),
            recommended_freezing_temperature: 6.6,
            width: 7.7,
            product_type_id: 8,
            seller_id: 9,
        };
        svc.create(request("prod1")).await.unwrap();
        let second = svc.create(request("prod2")).await.unwrap();

        let patch = ProductPatch {
            product_code: Some("prod1".into()),
            ..Default::default()
        };
        let err = svc.update(second.id, patch).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Conflict);
    }

    #[tokio::test]
    async fn update_passes_repository_failure_through() {
        let repo = RecordingRepository::with_records([employee(1, "AAA111222")]);
        let injected = DomainError::Storage("write rejected".into());
        *repo.fail_update.lock().unwrap() = Some(injected.clone());
        let patch = EmployeePatch {
            first_name: Some("Nova".into()),
            ..Default::default()
        };

        let err = service(&repo).update(1, patch).await.unwrap_err();

        assert_eq!(err, injected);
        assert_eq!(repo.updates(), 1);
        assert_eq!(repo.inner.get_by_id(1).await.unwrap().first_name, "First");
    }

    // ── Delete & queries ────────────────────────────────────────

    #[tokio::test]
    async fn delete_missing_id_is_not_found() {
        let repo = RecordingRepository::<Employee>::with_records([]);
        let err = service(&repo).delete(1).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[tokio::test]
    async fn deleted_record_is_gone() {
        let repo = RecordingRepository::with_records([employee(1, "AAA111222")]);
        let svc = service(&repo);

        svc.delete(1).await.unwrap();

        let err = svc.get_by_id(1).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(svc.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_passes_storage_error_through() {
        let repo = RecordingRepository::with_records([employee(1, "AAA111222")]);
        let injected = DomainError::Storage("disk full".into());
        *repo.fail_delete.lock().unwrap() = Some(injected.clone());

        let err = service(&repo).delete(1).await.unwrap_err();

        assert_eq!(err, injected);
        assert_eq!(repo.inner.len(), 1);
    }

    #[tokio::test]
    async fn get_all_passes_storage_error_through() {
        let repo = RecordingRepository::<Employee>::with_records([]);
        *repo.fail_get_all.lock().unwrap() = Some(DomainError::Storage("boom".into()));

        let err = service(&repo).get_all().await.unwrap_err();

        assert_eq!(err, DomainError::Storage("boom".into()));
    }

    // ── Concurrency ─────────────────────────────────────────────

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn serialized_writes_admit_one_of_many_duplicate_creates() {
        let repo = RecordingRepository::<Employee>::with_records([]);
        let svc = Arc::new(InventoryService::with_serialized_writes(
            repo.clone() as Arc<dyn Repository<Employee>>
        ));
        assert!(svc.serializes_writes());

        let tasks: Vec<_> = (0..16)
            .map(|_| {
                let svc = svc.clone();
                tokio::spawn(async move { svc.create(new_employee("AAA111222")).await })
            })
            .collect();

        let mut ok = 0;
        for task in tasks {
            if task.await.unwrap().is_ok() {
                ok += 1;
            }
        }

        assert_eq!(ok, 1);
        assert_eq!(repo.inner.len(), 1);
    }
}
