/// Errors from store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The named document or image does not exist.
    #[error("{0} does not exist.")]
    NotFound(String),

    /// I/O error from the backing directory (permissions, disk full).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// Returns `true` for the not-found case, which callers surface as a
    /// redirect rather than an internal failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
