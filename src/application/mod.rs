//! Application layer: use-cases on top of the storage port.

pub mod inventory;

pub use inventory::{EmployeeService, InventoryService, ProductService, SectionService};
