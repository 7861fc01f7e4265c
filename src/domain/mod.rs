//! Domain layer: inventory entities and the storage contract they are persisted through.

pub mod employee;
pub mod entity;
pub mod product;
pub mod repositories;
pub mod section;

pub use employee::{CreateEmployee, Employee, EmployeePatch};
pub use entity::Entity;
pub use product::{CreateProduct, Product, ProductPatch};
pub use repositories::{DomainResult, Repository, RepositoryProvider};
pub use section::{CreateSection, Section, SectionPatch};

pub use crate::shared::errors::{DomainError, ErrorKind};
