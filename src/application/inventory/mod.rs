//! Inventory use-cases
//!
//! One generic service enforces uniqueness, id allocation and partial-update
//! merge for every entity type.

pub mod service;

pub use service::{EmployeeService, InventoryService, ProductService, SectionService};
