//! Product aggregate

pub mod model;

pub use model::{CreateProduct, Product, ProductPatch};
