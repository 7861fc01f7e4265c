//! Database repository implementations
//!
//! Per-entity SeaORM repositories + unified RepositoryProvider.

pub mod employee_repository;
pub mod product_repository;
pub mod repository_provider;
pub mod section_repository;

pub use employee_repository::SeaOrmEmployeeRepository;
pub use product_repository::SeaOrmProductRepository;
pub use repository_provider::SeaOrmRepositoryProvider;
pub use section_repository::SeaOrmSectionRepository;

use sea_orm::{DbErr, SqlErr};

use crate::domain::{DomainError, Entity};

// ── Conversion helpers ──────────────────────────────────────────

pub(crate) fn db_err(e: DbErr) -> DomainError {
    DomainError::Storage(format!("Database error: {}", e))
}

/// Map an insert/update failure. Unique-index violations become conflicts on
/// whichever column the database names (the uniqueness field or the id).
pub(crate) fn write_err<E: Entity>(e: DbErr, record: &E) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::debug!(entity = E::NAME, %detail, "Unique constraint violated");
            if detail.contains(E::UNIQUE_FIELD) {
                DomainError::conflict(E::NAME, E::UNIQUE_FIELD, record.unique_key())
            } else {
                DomainError::conflict(E::NAME, "id", record.id())
            }
        }
        _ => db_err(e),
    }
}
