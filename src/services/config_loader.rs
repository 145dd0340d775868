//! Configuration loading for history-mcp.
//!
//! Sources, lowest to highest priority:
//! 1. Built-in defaults
//! 2. A TOML file named by `HISTORY_MCP_CONFIG`, if set
//! 3. `HISTORY_MCP_*` environment variables (`HISTORY_MCP_SERVER_NAME`,
//!    `HISTORY_MCP_FETCH_TIMEOUT_SECS`)
//! 4. `SQLITE_PATH`

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::types::errors::ConfigError;
use crate::types::settings::ServerConfig;

/// Environment variable naming an optional TOML config file.
pub const CONFIG_FILE_ENV: &str = "HISTORY_MCP_CONFIG";

/// Environment variable holding the history database path.
pub const SQLITE_PATH_ENV: &str = "SQLITE_PATH";

const ENV_PREFIX: &str = "HISTORY_MCP_";

/// Environment variable overriding the announced server name.
pub const SERVER_NAME_ENV: &str = "HISTORY_MCP_SERVER_NAME";

/// Builds the layered figment the configuration is extracted from.
///
/// Path and name variables are merged as plain strings: figment's `Env`
/// provider would parse `2024` or `true` into typed values.
pub fn figment() -> Result<Figment, ConfigError> {
    let mut figment = Figment::new().merge(Serialized::defaults(ServerConfig::default()));

    if let Some(path) = std::env::var_os(CONFIG_FILE_ENV) {
        let path = PathBuf::from(path);
        if !path.is_file() {
            return Err(ConfigError::Invalid(format!(
                "config file {} not found",
                path.display()
            )));
        }
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed(ENV_PREFIX).ignore(&["CONFIG", "SERVER_NAME"]));

    if let Ok(name) = std::env::var(SERVER_NAME_ENV) {
        figment = figment.merge(Serialized::default("server_name", name));
    }
    if let Some(path) = std::env::var_os(SQLITE_PATH_ENV) {
        figment = figment.merge(Serialized::default("sqlite_path", PathBuf::from(path)));
    }

    Ok(figment)
}

/// Loads the configuration from the process environment.
pub fn load() -> Result<ServerConfig, ConfigError> {
    extract(figment()?)
}

/// Extracts a [`ServerConfig`] from `figment` and checks that it names a
/// readable history database.
pub fn extract(figment: Figment) -> Result<ServerConfig, ConfigError> {
    let config: ServerConfig = figment.extract()?;
    validate(&config)?;
    Ok(config)
}

/// Fails fast when the history database path is missing or points nowhere.
pub fn validate(config: &ServerConfig) -> Result<(), ConfigError> {
    let path = config
        .sqlite_path
        .as_deref()
        .filter(|p| !p.as_os_str().is_empty())
        .ok_or(ConfigError::MissingDatabasePath)?;

    if !path.is_file() {
        return Err(ConfigError::DatabaseNotFound(path.to_path_buf()));
    }
    Ok(())
}
