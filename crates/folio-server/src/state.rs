use std::sync::Arc;

use folio_auth::{FileCredentials, SessionGate};
use folio_store::{DocumentStore, FsDocumentStore, FsImageStore, ImageStore};

use crate::config::ServerConfig;
use crate::sessions::SessionRegistry;

/// Shared application state handed to every handler.
///
/// Stores and gate sit behind trait objects so tests run against the
/// in-memory backends with canned credentials.
#[derive(Clone)]
pub struct AppState {
    pub documents: Arc<dyn DocumentStore>,
    pub images: Arc<dyn ImageStore>,
    pub gate: Arc<SessionGate>,
    pub sessions: Arc<SessionRegistry>,
}

impl AppState {
    /// Production wiring: filesystem stores and the TOML credential file
    /// from the configuration.
    pub fn from_config(config: &ServerConfig) -> Self {
        Self::with_parts(
            Arc::new(FsDocumentStore::new(&config.data_dir)),
            Arc::new(FsImageStore::new(&config.image_dir)),
            SessionGate::new(Box::new(FileCredentials::new(&config.credentials_path))),
        )
    }

    /// Explicit wiring, used by tests and embedding.
    pub fn with_parts(
        documents: Arc<dyn DocumentStore>,
        images: Arc<dyn ImageStore>,
        gate: SessionGate,
    ) -> Self {
        Self {
            documents,
            images,
            gate: Arc::new(gate),
            sessions: Arc::new(SessionRegistry::new()),
        }
    }
}
