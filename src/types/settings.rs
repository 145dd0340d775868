use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Name announced to the host when none is configured.
pub const DEFAULT_SERVER_NAME: &str = "historyMCP";

/// Process-wide configuration, resolved once at startup.
///
/// Built by [`crate::services::config_loader::load`] and passed by reference
/// to the components that need it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Path to the browser history database (`SQLITE_PATH`).
    #[serde(default)]
    pub sqlite_path: Option<PathBuf>,
    /// Name reported in the `initialize` handshake.
    #[serde(default = "default_server_name")]
    pub server_name: String,
    /// Per-request timeout for page fetches. `None` keeps the client default.
    #[serde(default)]
    pub fetch_timeout_secs: Option<u64>,
}

fn default_server_name() -> String {
    DEFAULT_SERVER_NAME.to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            sqlite_path: None,
            server_name: default_server_name(),
            fetch_timeout_secs: None,
        }
    }
}

impl ServerConfig {
    /// Convenience constructor used by tests and embedders.
    pub fn with_database(path: impl Into<PathBuf>) -> Self {
        Self {
            sqlite_path: Some(path.into()),
            ..Self::default()
        }
    }
}
