use folio_types::{DocumentName, ImageName};

use crate::error::StoreResult;

/// Named text documents in a single flat directory.
///
/// All implementations must satisfy these invariants:
/// - A name uniquely determines its entry; no two documents share a name.
/// - The store is stateless between calls: the backing directory is
///   authoritative and nothing is cached.
/// - `update` is a blind write: it creates the entry when absent and
///   replaces the content when present (last write wins).
/// - There is no locking. Concurrent writers to the same name can
///   interleave; this matches a single-process deployment.
/// - All I/O errors are propagated, never silently ignored.
pub trait DocumentStore: Send + Sync {
    /// List document names in directory order.
    ///
    /// Entries that are not valid document names (foreign files dropped
    /// into the directory) are skipped.
    fn list(&self) -> StoreResult<Vec<DocumentName>>;

    /// Read a document's content.
    ///
    /// Returns `StoreError::NotFound` if the document does not exist.
    fn read(&self, name: &DocumentName) -> StoreResult<String>;

    /// Check whether a document exists.
    fn exists(&self, name: &DocumentName) -> StoreResult<bool>;

    /// Create an empty document.
    ///
    /// Name validation already happened when the `DocumentName` was parsed;
    /// creation is the separate second step so callers can re-render input
    /// on a validation failure without touching the store.
    fn create(&self, name: &DocumentName) -> StoreResult<()>;

    /// Replace a document's content, creating the entry if absent.
    fn update(&self, name: &DocumentName, content: &str) -> StoreResult<()>;

    /// Delete a document. Returns `StoreError::NotFound` if absent.
    fn delete(&self, name: &DocumentName) -> StoreResult<()>;

    /// Copy a document to `{basename}_copy{extension}` and return the new
    /// name.
    ///
    /// Read-then-write with no isolation. A second duplication overwrites
    /// the previous copy rather than erroring. Returns
    /// `StoreError::NotFound` if the source is absent.
    fn duplicate(&self, name: &DocumentName) -> StoreResult<DocumentName> {
        let content = self.read(name)?;
        let copy = name.duplicate();
        self.update(&copy, &content)?;
        Ok(copy)
    }
}

/// Binary images in a single flat directory.
///
/// Images are write-once from the application's point of view in that there
/// is no delete or edit surface, but `upload` overwrites an existing name
/// silently (no versioning).
pub trait ImageStore: Send + Sync {
    /// List image names in directory order, skipping foreign entries.
    fn list(&self) -> StoreResult<Vec<ImageName>>;

    /// Read an image's bytes. Returns `StoreError::NotFound` if absent.
    fn read(&self, name: &ImageName) -> StoreResult<Vec<u8>>;

    /// Check whether an image exists.
    fn exists(&self, name: &ImageName) -> StoreResult<bool>;

    /// Write an image's bytes, overwriting any existing entry.
    fn upload(&self, name: &ImageName, bytes: &[u8]) -> StoreResult<()>;
}
