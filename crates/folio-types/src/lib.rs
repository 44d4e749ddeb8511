//! Foundation types for Folio.
//!
//! This crate provides the validated name types used throughout the system.
//! Every other Folio crate depends on `folio-types`.
//!
//! # Key Types
//!
//! - [`DocumentName`] — validated document name (`.md` or `.txt`)
//! - [`DocumentKind`] — closed content-kind variant derived from the extension
//! - [`ImageName`] — validated image name (`.jpg`)
//! - [`NameError`] — validation failures with user-facing messages
//!
//! Validation happens exactly once, at parse time. The rest of the system
//! only ever handles already-valid names, so stores and renderers never
//! re-check or guess.

pub mod document;
pub mod error;
pub mod image;

pub use document::{DocumentKind, DocumentName};
pub use error::{NameError, NameResult};
pub use image::ImageName;
