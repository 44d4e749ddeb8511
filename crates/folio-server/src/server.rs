use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::router::build_router;
use crate::state::AppState;

/// The Folio content-manager server.
pub struct FolioServer {
    config: ServerConfig,
}

impl FolioServer {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(AppState::from_config(&self.config))
    }

    /// Start serving requests.
    ///
    /// The document and image directories are created if absent so a fresh
    /// deployment starts from empty listings rather than I/O errors.
    pub async fn serve(self) -> ServerResult<()> {
        std::fs::create_dir_all(&self.config.data_dir)?;
        std::fs::create_dir_all(&self.config.image_dir)?;

        let app = build_router(AppState::from_config(&self.config));
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("folio server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = FolioServer::new(ServerConfig::default());
        assert_eq!(
            server.config().bind_addr,
            "127.0.0.1:7878".parse().unwrap()
        );
    }

    #[test]
    fn router_builds() {
        let server = FolioServer::new(ServerConfig::default());
        let _router = server.router();
    }
}
