/// Errors from name validation.
///
/// The `Display` text of each variant is the exact message surfaced to the
/// user when a submitted name is rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NameError {
    /// The submitted name was empty.
    #[error("A name is required.")]
    Empty,

    /// The extension is not one of the supported document extensions.
    #[error("Invalid file type. Only markdown (.md) and text (.txt) files are valid.")]
    InvalidDocumentExtension,

    /// The extension is not a supported image extension.
    #[error("Invalid file type. Only jpeg (.jpg) files allowed.")]
    InvalidImageExtension,

    /// The name contains a path separator or traversal component.
    #[error("Names may not contain path separators.")]
    InvalidCharacter,
}

/// Result alias for name parsing.
pub type NameResult<T> = Result<T, NameError>;
