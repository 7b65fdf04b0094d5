//! Storage traits and implementations
//!
//! The trait-based design keeps the application state independent of where
//! messages live. Only an in-memory backend exists; messages are seeded at
//! startup and never persisted.

mod memory;
mod traits;

pub use memory::InMemoryMessageStore;
pub use traits::MessageStore;
