//! In-process storage backend

mod memory;

pub use memory::{InMemoryRepository, InMemoryRepositoryProvider};
