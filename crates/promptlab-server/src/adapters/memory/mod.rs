//! In-memory entity store
//!
//! The storage collaborator behind both repository ports. A single
//! `RwLock` covers both entity maps, so the collection-delete cascade
//! mutates prompts and collections under one write guard and readers
//! never observe a prompt referencing a deleted collection. Both
//! repositories hold the store through a shared `Arc` handle.

mod collection_repository;
mod prompt_repository;

use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use promptlab::domain::{Collection, Prompt};

pub use collection_repository::MemoryCollectionRepository;
pub use prompt_repository::MemoryPromptRepository;

#[derive(Default)]
pub(crate) struct StoreInner {
    pub(crate) prompts: HashMap<Uuid, Prompt>,
    pub(crate) collections: HashMap<Uuid, Collection>,
}

/// Process-wide entity store shared by the repository adapters
#[derive(Default)]
pub struct MemoryStore {
    pub(crate) inner: RwLock<StoreInner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
