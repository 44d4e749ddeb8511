//! HTTP dispatcher for Folio.
//!
//! A thin axum layer over the core crates: routes resolve the caller's
//! session from a cookie, run the sign-in gate, call the document/image
//! stores, and render HTML pages (markdown documents through
//! `folio-render`). All storage locations come from [`ServerConfig`];
//! nothing here reads the process environment.

pub mod config;
pub mod error;
pub mod handler;
pub mod pages;
pub mod router;
pub mod server;
pub mod sessions;
pub mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use router::build_router;
pub use server::FolioServer;
pub use sessions::{RequestSession, SessionRegistry, SESSION_COOKIE};
pub use state::AppState;
