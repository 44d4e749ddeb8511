use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use folio_types::{DocumentName, ImageName};

use crate::error::{StoreError, StoreResult};
use crate::traits::{DocumentStore, ImageStore};

/// Documents stored as files in a flat directory, filename = document name.
///
/// The directory is the single source of truth; nothing is cached in
/// memory. `DocumentName` guarantees the name is a plain basename, so the
/// join below cannot escape the root.
#[derive(Debug)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    /// Create a store over an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The backing directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &DocumentName) -> PathBuf {
        self.root.join(name.as_str())
    }
}

impl DocumentStore for FsDocumentStore {
    fn list(&self) -> StoreResult<Vec<DocumentName>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            match DocumentName::parse(&file_name.to_string_lossy()) {
                Ok(name) => names.push(name),
                Err(_) => {
                    tracing::debug!(entry = %file_name.to_string_lossy(), "skipping foreign entry");
                }
            }
        }
        Ok(names)
    }

    fn read(&self, name: &DocumentName) -> StoreResult<String> {
        fs::read_to_string(self.path(name)).map_err(|e| not_found_or_io(e, name.as_str()))
    }

    fn exists(&self, name: &DocumentName) -> StoreResult<bool> {
        Ok(self.path(name).is_file())
    }

    fn create(&self, name: &DocumentName) -> StoreResult<()> {
        fs::write(self.path(name), "")?;
        tracing::debug!(document = %name, "created document");
        Ok(())
    }

    fn update(&self, name: &DocumentName, content: &str) -> StoreResult<()> {
        fs::write(self.path(name), content)?;
        tracing::debug!(document = %name, bytes = content.len(), "updated document");
        Ok(())
    }

    fn delete(&self, name: &DocumentName) -> StoreResult<()> {
        fs::remove_file(self.path(name)).map_err(|e| not_found_or_io(e, name.as_str()))?;
        tracing::debug!(document = %name, "deleted document");
        Ok(())
    }
}

/// Images stored as files in a flat directory, filename = image name.
#[derive(Debug)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    /// Create a store over an existing directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The backing directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, name: &ImageName) -> PathBuf {
        self.root.join(name.as_str())
    }
}

impl ImageStore for FsImageStore {
    fn list(&self) -> StoreResult<Vec<ImageName>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            let file_name = entry.file_name();
            match ImageName::parse(&file_name.to_string_lossy()) {
                Ok(name) => names.push(name),
                Err(_) => {
                    tracing::debug!(entry = %file_name.to_string_lossy(), "skipping foreign entry");
                }
            }
        }
        Ok(names)
    }

    fn read(&self, name: &ImageName) -> StoreResult<Vec<u8>> {
        fs::read(self.path(name)).map_err(|e| not_found_or_io(e, name.as_str()))
    }

    fn exists(&self, name: &ImageName) -> StoreResult<bool> {
        Ok(self.path(name).is_file())
    }

    fn upload(&self, name: &ImageName, bytes: &[u8]) -> StoreResult<()> {
        fs::write(self.path(name), bytes)?;
        tracing::debug!(image = %name, bytes = bytes.len(), "stored image");
        Ok(())
    }
}

fn not_found_or_io(err: std::io::Error, name: &str) -> StoreError {
    if err.kind() == ErrorKind::NotFound {
        StoreError::NotFound(name.to_string())
    } else {
        StoreError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn doc(name: &str) -> DocumentName {
        DocumentName::parse(name).unwrap()
    }

    fn img(name: &str) -> ImageName {
        ImageName::parse(name).unwrap()
    }

    fn store() -> (TempDir, FsDocumentStore) {
        let dir = TempDir::new().unwrap();
        let store = FsDocumentStore::new(dir.path());
        (dir, store)
    }

    // -----------------------------------------------------------------------
    // Create / read
    // -----------------------------------------------------------------------

    #[test]
    fn create_then_read_is_empty() {
        let (_dir, store) = store();
        store.create(&doc("about.md")).unwrap();
        assert_eq!(store.read(&doc("about.md")).unwrap(), "");
    }

    #[test]
    fn create_appears_in_list() {
        let (_dir, store) = store();
        store.create(&doc("about.md")).unwrap();
        store.create(&doc("changes.txt")).unwrap();
        let names = store.list().unwrap();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&doc("about.md")));
        assert!(names.contains(&doc("changes.txt")));
    }

    #[test]
    fn read_missing_is_not_found() {
        let (_dir, store) = store();
        let err = store.read(&doc("ghost.md")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "ghost.md does not exist.");
    }

    #[test]
    fn list_skips_foreign_entries() {
        let (dir, store) = store();
        store.create(&doc("about.md")).unwrap();
        std::fs::write(dir.path().join("stray.pdf"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("subdir")).unwrap();
        assert_eq!(store.list().unwrap(), vec![doc("about.md")]);
    }

    // -----------------------------------------------------------------------
    // Update
    // -----------------------------------------------------------------------

    #[test]
    fn update_replaces_content() {
        let (_dir, store) = store();
        store.create(&doc("changes.txt")).unwrap();
        store.update(&doc("changes.txt"), "first").unwrap();
        store.update(&doc("changes.txt"), "second").unwrap();
        assert_eq!(store.read(&doc("changes.txt")).unwrap(), "second");
    }

    #[test]
    fn update_is_a_blind_write() {
        // No existence check: updating an absent name creates it.
        let (_dir, store) = store();
        store.update(&doc("fresh.md"), "content").unwrap();
        assert_eq!(store.read(&doc("fresh.md")).unwrap(), "content");
    }

    // -----------------------------------------------------------------------
    // Delete
    // -----------------------------------------------------------------------

    #[test]
    fn delete_removes_from_list_and_read() {
        let (_dir, store) = store();
        store.create(&doc("gone.md")).unwrap();
        store.delete(&doc("gone.md")).unwrap();
        assert!(store.list().unwrap().is_empty());
        assert!(store.read(&doc("gone.md")).unwrap_err().is_not_found());
    }

    #[test]
    fn delete_missing_is_not_found() {
        let (_dir, store) = store();
        assert!(store.delete(&doc("ghost.txt")).unwrap_err().is_not_found());
    }

    // -----------------------------------------------------------------------
    // Duplicate
    // -----------------------------------------------------------------------

    #[test]
    fn duplicate_copies_content() {
        let (_dir, store) = store();
        store.update(&doc("new.txt"), "original text").unwrap();
        let copy = store.duplicate(&doc("new.txt")).unwrap();
        assert_eq!(copy.as_str(), "new_copy.txt");
        assert_eq!(store.read(&copy).unwrap(), "original text");
        // Source untouched.
        assert_eq!(store.read(&doc("new.txt")).unwrap(), "original text");
    }

    #[test]
    fn duplicate_twice_overwrites_the_copy() {
        let (_dir, store) = store();
        store.update(&doc("new.txt"), "v1").unwrap();
        store.duplicate(&doc("new.txt")).unwrap();
        store.update(&doc("new.txt"), "v2").unwrap();
        let copy = store.duplicate(&doc("new.txt")).unwrap();
        assert_eq!(store.read(&copy).unwrap(), "v2");
        assert_eq!(store.list().unwrap().len(), 2);
    }

    #[test]
    fn duplicate_missing_source_is_not_found() {
        let (_dir, store) = store();
        assert!(store
            .duplicate(&doc("ghost.md"))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn exists_tracks_lifecycle() {
        let (_dir, store) = store();
        assert!(!store.exists(&doc("a.md")).unwrap());
        store.create(&doc("a.md")).unwrap();
        assert!(store.exists(&doc("a.md")).unwrap());
        store.delete(&doc("a.md")).unwrap();
        assert!(!store.exists(&doc("a.md")).unwrap());
    }

    // -----------------------------------------------------------------------
    // Images
    // -----------------------------------------------------------------------

    #[test]
    fn upload_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FsImageStore::new(dir.path());
        store.upload(&img("cat.jpg"), &[0xff, 0xd8, 0xff]).unwrap();
        assert_eq!(store.read(&img("cat.jpg")).unwrap(), vec![0xff, 0xd8, 0xff]);
        assert_eq!(store.list().unwrap(), vec![img("cat.jpg")]);
    }

    #[test]
    fn upload_overwrites_existing() {
        let dir = TempDir::new().unwrap();
        let store = FsImageStore::new(dir.path());
        store.upload(&img("cat.jpg"), b"old").unwrap();
        store.upload(&img("cat.jpg"), b"new").unwrap();
        assert_eq!(store.read(&img("cat.jpg")).unwrap(), b"new");
    }

    #[test]
    fn read_missing_image_is_not_found() {
        let dir = TempDir::new().unwrap();
        let store = FsImageStore::new(dir.path());
        assert!(store.read(&img("ghost.jpg")).unwrap_err().is_not_found());
    }
}
