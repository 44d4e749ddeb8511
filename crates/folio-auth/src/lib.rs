//! Authentication for Folio.
//!
//! Three pieces, kept deliberately separate:
//!
//! - [`CredentialSource`] -- verifies a plaintext password against a stored
//!   bcrypt hash. [`FileCredentials`] re-reads a TOML file per attempt;
//!   [`StaticCredentials`] serves tests and embedding.
//! - [`Session`] -- an explicit per-client value holding the signed-in
//!   username and a one-shot flash message.
//! - [`SessionGate`] -- the only path to protected operations: sign-in,
//!   sign-out, and the signed-in check that short-circuits everything else.

pub mod credentials;
pub mod error;
pub mod gate;
pub mod session;

pub use credentials::{CredentialSource, FileCredentials, StaticCredentials};
pub use error::{AuthError, AuthResult};
pub use gate::{
    SessionGate, FLASH_INVALID_CREDENTIALS, FLASH_MUST_SIGN_IN, FLASH_SIGNED_OUT, FLASH_WELCOME,
};
pub use session::Session;
