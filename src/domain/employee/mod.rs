//! Employee aggregate
//!
//! Warehouse staff identified by a fixed-length card number.

pub mod model;

pub use model::{CreateEmployee, Employee, EmployeePatch};
