use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration.
///
/// Storage locations are explicit construction-time inputs; nothing in the
/// stores or handlers reads the process environment.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,
    /// Directory holding the documents, one file per document.
    pub data_dir: PathBuf,
    /// Directory holding the uploaded images.
    pub image_dir: PathBuf,
    /// TOML file mapping usernames to bcrypt hashes.
    pub credentials_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:7878".parse().expect("valid literal addr"),
            data_dir: PathBuf::from("data"),
            image_dir: PathBuf::from("images"),
            credentials_path: PathBuf::from("users.toml"),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ServerResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&raw).map_err(|e| ServerError::Config(e.to_string()))
    }
}
