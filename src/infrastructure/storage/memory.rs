//! In-memory storage implementation

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    DomainError, DomainResult, Employee, Entity, Product, Repository, RepositoryProvider, Section,
};

/// In-memory repository for development and testing
pub struct InMemoryRepository<E: Entity> {
    records: DashMap<i32, E>,
}

impl<E: Entity> InMemoryRepository<E> {
    pub fn new() -> Self {
        Self {
            records: DashMap::new(),
        }
    }

    /// Repository pre-populated with `records`, keyed by their own ids.
    pub fn with_records(records: impl IntoIterator<Item = E>) -> Self {
        let repo = Self::new();
        for record in records {
            repo.records.insert(record.id(), record);
        }
        repo
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for InMemoryRepository<E> {
    async fn get_all(&self) -> DomainResult<Vec<E>> {
        let mut all: Vec<E> = self.records.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(|r| r.id());
        Ok(all)
    }

    async fn get_by_id(&self, id: i32) -> DomainResult<E> {
        self.records
            .get(&id)
            .map(|r| r.clone())
            .ok_or_else(|| DomainError::not_found(E::NAME, id))
    }

    async fn create(&self, candidate: E) -> DomainResult<E> {
        use dashmap::mapref::entry::Entry;

        match self.records.entry(candidate.id()) {
            Entry::Occupied(_) => Err(DomainError::conflict(E::NAME, "id", candidate.id())),
            Entry::Vacant(slot) => {
                slot.insert(candidate.clone());
                Ok(candidate)
            }
        }
    }

    async fn update(&self, id: i32, updated: E) -> DomainResult<E> {
        match self.records.get_mut(&id) {
            Some(mut slot) => {
                *slot = updated.clone();
                Ok(updated)
            }
            None => Err(DomainError::not_found(E::NAME, id)),
        }
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.records
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found(E::NAME, id))
    }

    async fn last_id(&self) -> DomainResult<i32> {
        Ok(self.records.iter().map(|e| *e.key()).max().unwrap_or(0))
    }
}

/// Repository provider keeping every collection in process memory.
pub struct InMemoryRepositoryProvider {
    employees: Arc<InMemoryRepository<Employee>>,
    sections: Arc<InMemoryRepository<Section>>,
    products: Arc<InMemoryRepository<Product>>,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self {
            employees: Arc::new(InMemoryRepository::new()),
            sections: Arc::new(InMemoryRepository::new()),
            products: Arc::new(InMemoryRepository::new()),
        }
    }
}

impl Default for InMemoryRepositoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn employees(&self) -> Arc<dyn Repository<Employee>> {
        self.employees.clone()
    }

    fn sections(&self) -> Arc<dyn Repository<Section>> {
        self.sections.clone()
    }

    fn products(&self) -> Arc<dyn Repository<Product>> {
        self.products.clone()
    }
}
