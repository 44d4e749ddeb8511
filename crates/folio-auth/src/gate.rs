use crate::credentials::CredentialSource;
use crate::error::{AuthError, AuthResult};
use crate::session::Session;

/// Flash shown after a successful sign-in.
pub const FLASH_WELCOME: &str = "Welcome!";
/// Flash shown when credentials are rejected.
pub const FLASH_INVALID_CREDENTIALS: &str = "Invalid Credentials";
/// Flash shown after sign-out.
pub const FLASH_SIGNED_OUT: &str = "You have been signed out.";
/// Flash shown when a guarded operation is attempted anonymously.
pub const FLASH_MUST_SIGN_IN: &str = "You must be signed in to do that.";

/// The sign-in gate: every protected operation passes through
/// [`SessionGate::require_signed_in`] before it runs.
///
/// The gate owns the credential source and mutates the caller's [`Session`]
/// explicitly. Sign-in and sign-out themselves are never gated.
pub struct SessionGate {
    credentials: Box<dyn CredentialSource>,
}

impl SessionGate {
    /// Create a gate over a credential source.
    pub fn new(credentials: Box<dyn CredentialSource>) -> Self {
        Self { credentials }
    }

    /// Attempt to sign the session in.
    ///
    /// On success the session becomes authenticated and carries the welcome
    /// flash. On rejection the session stays anonymous, the invalid-
    /// credentials flash is queued, and `AuthError::InvalidCredentials` is
    /// returned so the caller can respond with a 422-class status rather
    /// than a redirect.
    pub fn sign_in(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> AuthResult<()> {
        if self.credentials.verify(username, password)? {
            session.set_username(username);
            session.set_flash(FLASH_WELCOME);
            tracing::info!(username, "signed in");
            Ok(())
        } else {
            session.set_flash(FLASH_INVALID_CREDENTIALS);
            tracing::warn!(username, "sign-in rejected");
            Err(AuthError::InvalidCredentials)
        }
    }

    /// Sign the session out. Idempotent: signing out an anonymous session
    /// still queues the signed-out flash.
    pub fn sign_out(&self, session: &mut Session) {
        if let Some(username) = session.username() {
            tracing::info!(username, "signed out");
        }
        session.clear_username();
        session.set_flash(FLASH_SIGNED_OUT);
    }

    /// Require a signed-in session.
    ///
    /// No-op when authenticated. Otherwise queues the must-sign-in flash
    /// and returns `AuthError::Unauthorized`; the caller must short-circuit
    /// and redirect without executing the guarded operation.
    pub fn require_signed_in(&self, session: &mut Session) -> AuthResult<()> {
        if session.signed_in() {
            Ok(())
        } else {
            session.set_flash(FLASH_MUST_SIGN_IN);
            Err(AuthError::Unauthorized)
        }
    }
}
