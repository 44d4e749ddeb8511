use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{AuthError, AuthResult};

/// A read-only source of username -> password-hash credentials.
///
/// Verification never touches plaintext storage: the caller's plaintext is
/// compared against the stored bcrypt hash and discarded.
pub trait CredentialSource: Send + Sync {
    /// Verify a plaintext password for a user.
    ///
    /// Returns `Ok(false)` when the username is absent or the password does
    /// not match. Only infrastructure failures (unreadable file, malformed
    /// hash) are errors.
    fn verify(&self, username: &str, password: &str) -> AuthResult<bool>;
}

#[derive(Deserialize)]
struct CredentialFile {
    users: HashMap<String, String>,
}

/// Credentials stored in a TOML file:
///
/// ```toml
/// [users]
/// admin = "$2b$12$..."
/// ```
///
/// The file is re-read on every verification attempt, so edits take effect
/// without a restart. There is no caching contract to uphold.
#[derive(Debug)]
pub struct FileCredentials {
    path: PathBuf,
}

impl FileCredentials {
    /// Create a source backed by the given TOML file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> AuthResult<HashMap<String, String>> {
        let raw = std::fs::read_to_string(&self.path)?;
        let file: CredentialFile =
            toml::from_str(&raw).map_err(|e| AuthError::CredentialFile(e.to_string()))?;
        Ok(file.users)
    }
}

impl CredentialSource for FileCredentials {
    fn verify(&self, username: &str, password: &str) -> AuthResult<bool> {
        let users = self.load()?;
        match users.get(username) {
            Some(hash) => Ok(bcrypt::verify(password, hash)?),
            None => Ok(false),
        }
    }
}

/// Fixed in-memory credentials for tests and embedding.
#[derive(Debug, Default)]
pub struct StaticCredentials {
    users: HashMap<String, String>,
}

impl StaticCredentials {
    /// Create an empty credential set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a user with an already-computed bcrypt hash.
    pub fn insert_hash(mut self, username: impl Into<String>, hash: impl Into<String>) -> Self {
        self.users.insert(username.into(), hash.into());
        self
    }

    /// Add a user, hashing the plaintext at the given bcrypt cost.
    pub fn with_user(
        self,
        username: impl Into<String>,
        password: &str,
        cost: u32,
    ) -> AuthResult<Self> {
        let hash = bcrypt::hash(password, cost)?;
        Ok(self.insert_hash(username, hash))
    }
}

impl CredentialSource for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> AuthResult<bool> {
        match self.users.get(username) {
            Some(hash) => Ok(bcrypt::verify(password, hash)?),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    // Minimum bcrypt cost keeps the tests quick.
    const TEST_COST: u32 = 4;

    #[test]
    fn static_verify_accepts_correct_password() {
        let creds = StaticCredentials::new()
            .with_user("admin", "secret", TEST_COST)
            .unwrap();
        assert!(creds.verify("admin", "secret").unwrap());
    }

    #[test]
    fn static_verify_rejects_wrong_password() {
        let creds = StaticCredentials::new()
            .with_user("admin", "secret", TEST_COST)
            .unwrap();
        assert!(!creds.verify("admin", "wrong").unwrap());
    }

    #[test]
    fn static_verify_rejects_unknown_user() {
        let creds = StaticCredentials::new()
            .with_user("admin", "secret", TEST_COST)
            .unwrap();
        assert!(!creds.verify("nouser", "secret").unwrap());
    }

    #[test]
    fn file_credentials_round_trip() {
        let hash = bcrypt::hash("secret", TEST_COST).unwrap();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[users]\nadmin = \"{hash}\"").unwrap();

        let creds = FileCredentials::new(file.path());
        assert!(creds.verify("admin", "secret").unwrap());
        assert!(!creds.verify("admin", "wrong").unwrap());
        assert!(!creds.verify("nouser", "anything").unwrap());
    }

    #[test]
    fn file_credentials_missing_file_is_io_error() {
        let creds = FileCredentials::new("/nonexistent/users.toml");
        assert!(matches!(
            creds.verify("admin", "secret"),
            Err(AuthError::Io(_))
        ));
    }

    #[test]
    fn file_credentials_malformed_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [[[").unwrap();

        let creds = FileCredentials::new(file.path());
        assert!(matches!(
            creds.verify("admin", "secret"),
            Err(AuthError::CredentialFile(_))
        ));
    }

    #[test]
    fn malformed_hash_is_hash_error() {
        let creds = StaticCredentials::new().insert_hash("admin", "not-a-bcrypt-hash");
        assert!(matches!(
            creds.verify("admin", "secret"),
            Err(AuthError::Hash(_))
        ));
    }
}
