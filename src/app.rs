//! App Core for history-mcp.
//!
//! Holds the startup-validated configuration together with the history
//! reader and page fetcher built from it.

use crate::managers::history_manager::HistoryManager;
use crate::services::config_loader;
use crate::services::page_fetcher::PageFetcher;
use crate::types::errors::ConfigError;
use crate::types::settings::ServerConfig;

/// Central application struct the RPC handler dispatches into.
pub struct App {
    pub config: ServerConfig,
    pub history_manager: HistoryManager,
    pub page_fetcher: PageFetcher,
}

impl App {
    /// Creates a new App from an already loaded configuration.
    ///
    /// Refuses to build when the history database path is unset or missing.
    pub fn new(config: ServerConfig) -> Result<Self, ConfigError> {
        config_loader::validate(&config)?;
        let db_path = config
            .sqlite_path
            .clone()
            .ok_or(ConfigError::MissingDatabasePath)?;

        let history_manager = HistoryManager::new(db_path);
        let page_fetcher = PageFetcher::from_config(&config)?;

        Ok(Self {
            config,
            history_manager,
            page_fetcher,
        })
    }

    /// Loads configuration from the environment and builds the App.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(config_loader::load()?)
    }
}
