//! DashMap-backed keyed stores
//!
//! One generic map underlies all three stores. DashMap gives per-shard
//! locking, so reads and writes to the same key are individually
//! consistent; there is no cross-key or cross-request transaction and
//! concurrent writers to one key are last-write-wins.

use anno_domain::error::{Error, Result};
use anno_domain::ports::{AnnotationStore, CodeFileStore, DocumentStore};
use anno_domain::{Annotation, CodeFile, Document};
use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Generic keyed storage shared by the concrete stores
struct MemoryMap<T: Clone> {
    entries: DashMap<String, T>,
    /// Resource label used in NotFound messages (e.g. "document")
    resource: &'static str,
}

impl<T: Clone> MemoryMap<T> {
    fn new(resource: &'static str) -> Self {
        Self {
            entries: DashMap::new(),
            resource,
        }
    }

    fn insert(&self, id: String, value: T) {
        self.entries.insert(id, value);
    }

    fn get(&self, id: &str) -> Result<T> {
        self.entries
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| Error::not_found(format!("{} {}", self.resource, id)))
    }

    /// Overwrite the value for `id`, failing when `id` is absent.
    /// The entry API keeps the check and the write under one shard lock.
    fn replace(&self, id: &str, value: T) -> Result<()> {
        match self.entries.entry(id.to_string()) {
            Entry::Occupied(mut occupied) => {
                occupied.insert(value);
                Ok(())
            }
            Entry::Vacant(_) => Err(Error::not_found(format!("{} {}", self.resource, id))),
        }
    }
}

/// In-memory document store
pub struct InMemoryDocumentStore {
    map: MemoryMap<Document>,
}

impl InMemoryDocumentStore {
    /// Create an empty document store
    pub fn new() -> Self {
        Self {
            map: MemoryMap::new("document"),
        }
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, document: Document) -> Result<()> {
        self.map.insert(document.id.clone(), document);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Document> {
        self.map.get(id)
    }
}

/// In-memory code file store
pub struct InMemoryCodeFileStore {
    map: MemoryMap<CodeFile>,
}

impl InMemoryCodeFileStore {
    /// Create an empty code file store
    pub fn new() -> Self {
        Self {
            map: MemoryMap::new("code file"),
        }
    }
}

impl Default for InMemoryCodeFileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeFileStore for InMemoryCodeFileStore {
    async fn insert(&self, code_file: CodeFile) -> Result<()> {
        self.map.insert(code_file.id.clone(), code_file);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<CodeFile> {
        self.map.get(id)
    }
}

/// In-memory annotation store
pub struct InMemoryAnnotationStore {
    map: MemoryMap<Annotation>,
}

impl InMemoryAnnotationStore {
    /// Create an empty annotation store
    pub fn new() -> Self {
        Self {
            map: MemoryMap::new("annotation"),
        }
    }
}

impl Default for InMemoryAnnotationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AnnotationStore for InMemoryAnnotationStore {
    async fn insert(&self, annotation: Annotation) -> Result<()> {
        self.map.insert(annotation.id.clone(), annotation);
        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Annotation> {
        self.map.get(id)
    }

    async fn replace(&self, id: &str, annotation: Annotation) -> Result<()> {
        self.map.replace(id, annotation)
    }
}
