//! Infrastructure Adapters
//!
//! Implementations of the domain's repository ports.

mod memory;

pub use memory::{MemoryCollectionRepository, MemoryPromptRepository, MemoryStore};
