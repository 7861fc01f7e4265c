//! Repository traits for the domain layer
//!
//! - `Repository<E>`: storage contract for one entity collection
//! - `RepositoryProvider`: hands out one repository per entity type

use std::sync::Arc;

use async_trait::async_trait;

use super::entity::Entity;
use super::{Employee, Product, Section};
pub use crate::shared::errors::DomainResult;

/// Storage contract for a collection of `E`.
///
/// Implementations own the persisted state and never interpret business rules
/// beyond their own consistency checks.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// All records, ascending by id.
    async fn get_all(&self) -> DomainResult<Vec<E>>;

    /// Fails with `NotFound` if `id` is absent.
    async fn get_by_id(&self, id: i32) -> DomainResult<E>;

    /// Persist `candidate` and return the stored form.
    async fn create(&self, candidate: E) -> DomainResult<E>;

    /// Replace the record stored under `id`. Fails with `NotFound` if absent.
    async fn update(&self, id: i32, updated: E) -> DomainResult<E>;

    /// Fails with `NotFound` if `id` is absent.
    async fn delete(&self, id: i32) -> DomainResult<()>;

    /// Highest id currently stored, 0 for an empty collection.
    async fn last_id(&self) -> DomainResult<i32>;
}

/// Provides access to all entity repositories.
///
/// ```ignore
/// let employees = repos.employees();
/// let all = employees.get_all().await?;
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn employees(&self) -> Arc<dyn Repository<Employee>>;
    fn sections(&self) -> Arc<dyn Repository<Section>>;
    fn products(&self) -> Arc<dyn Repository<Product>>;
}
