//! # Warehouse Inventory Service
//!
//! CRUD over warehouse employees, sections and products, each identified by
//! an integer id and unique by one business field.
//!
//! ## Architecture
//!
//! - **domain**: entities, the `Entity` trait and the `Repository` storage port
//! - **application**: `InventoryService<E>`, uniqueness and partial-update rules
//! - **infrastructure**: in-memory and SQLite (SeaORM) repositories
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: process lifecycle, tracing, metrics

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig, StorageBackend};

pub use application::inventory::{
    EmployeeService, InventoryService, ProductService, SectionService,
};
pub use infrastructure::{
    init_database, DatabaseConfig, InMemoryRepository, InMemoryRepositoryProvider,
    SeaOrmRepositoryProvider,
};
pub use interfaces::http::{create_router, InventoryState};
pub use shared::errors::{DomainError, DomainResult, InfraError};
