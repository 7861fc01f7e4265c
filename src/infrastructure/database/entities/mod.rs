//! Database entities module

pub mod employee;
pub mod product;
pub mod section;

pub use employee::Entity as Employee;
pub use product::Entity as Product;
pub use section::Entity as Section;
