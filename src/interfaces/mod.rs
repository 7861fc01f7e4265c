//! Outer adapters: the HTTP API.

pub mod http;

pub use http::{create_router, InventoryState};
