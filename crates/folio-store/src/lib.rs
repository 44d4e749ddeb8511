//! Directory-backed document and image storage for Folio.
//!
//! Documents live as plain files in a flat directory (filename = document
//! name); images live in a second directory. The directories are
//! authoritative: stores keep no in-memory state between calls.
//!
//! # Storage Backends
//!
//! All backends implement the [`DocumentStore`] / [`ImageStore`] traits:
//!
//! - [`FsDocumentStore`] / [`FsImageStore`] -- filesystem directories
//! - [`InMemoryDocumentStore`] / [`InMemoryImageStore`] -- `HashMap`-based
//!   stores for tests and embedding
//!
//! # Design Rules
//!
//! 1. Name validation happens before the store is reached: operations take
//!    already-parsed `DocumentName` / `ImageName` values.
//! 2. `update` and `upload` are blind writes (last write wins, no existence
//!    check or versioning).
//! 3. `duplicate` is read-then-write with no isolation from concurrent
//!    writers; repeating it overwrites the previous copy.
//! 4. No locking around filesystem mutation: this targets a single-process
//!    deployment.
//! 5. All I/O errors are propagated, never silently ignored.

pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use fs::{FsDocumentStore, FsImageStore};
pub use memory::{InMemoryDocumentStore, InMemoryImageStore};
pub use traits::{DocumentStore, ImageStore};
