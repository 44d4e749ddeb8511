use std::collections::HashMap;
use std::sync::RwLock;

use folio_types::{DocumentName, ImageName};

use crate::error::{StoreError, StoreResult};
use crate::traits::{DocumentStore, ImageStore};

/// In-memory, HashMap-based document store.
///
/// Intended for tests and embedding. Content is held behind a `RwLock` for
/// safe concurrent access. `list` returns names in sorted order since a
/// HashMap has no directory order to preserve.
#[derive(Default)]
pub struct InMemoryDocumentStore {
    documents: RwLock<HashMap<DocumentName, String>>,
}

impl InMemoryDocumentStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently stored.
    pub fn len(&self) -> usize {
        self.documents.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.documents.read().expect("lock poisoned").is_empty()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn list(&self) -> StoreResult<Vec<DocumentName>> {
        let map = self.documents.read().expect("lock poisoned");
        let mut names: Vec<DocumentName> = map.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn read(&self, name: &DocumentName) -> StoreResult<String> {
        let map = self.documents.read().expect("lock poisoned");
        map.get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.as_str().to_string()))
    }

    fn exists(&self, name: &DocumentName) -> StoreResult<bool> {
        let map = self.documents.read().expect("lock poisoned");
        Ok(map.contains_key(name))
    }

    fn create(&self, name: &DocumentName) -> StoreResult<()> {
        let mut map = self.documents.write().expect("lock poisoned");
        map.insert(name.clone(), String::new());
        Ok(())
    }

    fn update(&self, name: &DocumentName, content: &str) -> StoreResult<()> {
        let mut map = self.documents.write().expect("lock poisoned");
        map.insert(name.clone(), content.to_string());
        Ok(())
    }

    fn delete(&self, name: &DocumentName) -> StoreResult<()> {
        let mut map = self.documents.write().expect("lock poisoned");
        map.remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(name.as_str().to_string()))
    }
}

impl std::fmt::Debug for InMemoryDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryDocumentStore")
            .field("document_count", &self.len())
            .finish()
    }
}

/// In-memory, HashMap-based image store for tests and embedding.
#[derive(Default)]
pub struct InMemoryImageStore {
    images: RwLock<HashMap<ImageName, Vec<u8>>>,
}

impl InMemoryImageStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images currently stored.
    pub fn len(&self) -> usize {
        self.images.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.images.read().expect("lock poisoned").is_empty()
    }
}

impl ImageStore for InMemoryImageStore {
    fn list(&self) -> StoreResult<Vec<ImageName>> {
        let map = self.images.read().expect("lock poisoned");
        let mut names: Vec<ImageName> = map.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn read(&self, name: &ImageName) -> StoreResult<Vec<u8>> {
        let map = self.images.read().expect("lock poisoned");
        map.get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(name.as_str().to_string()))
    }

    fn exists(&self, name: &ImageName) -> StoreResult<bool> {
        let map = self.images.read().expect("lock poisoned");
        Ok(map.contains_key(name))
    }

    fn upload(&self, name: &ImageName, bytes: &[u8]) -> StoreResult<()> {
        let mut map = self.images.write().expect("lock poisoned");
        map.insert(name.clone(), bytes.to_vec());
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryImageStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryImageStore")
            .field("image_count", &self.len())
            .finish()
    }
}
