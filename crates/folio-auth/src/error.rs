/// Errors from authentication and gating.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// Username unknown or password mismatch.
    #[error("Invalid Credentials")]
    InvalidCredentials,

    /// A guarded operation was attempted without a signed-in session.
    #[error("You must be signed in to do that.")]
    Unauthorized,

    /// The credential file could not be parsed.
    #[error("credential file error: {0}")]
    CredentialFile(String),

    /// The credential file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A stored hash was malformed.
    #[error("password hash error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Result alias for auth operations.
pub type AuthResult<T> = Result<T, AuthError>;
