use std::path::PathBuf;

use thiserror::Error;

use crate::types::protocol::error_codes;

// === ConfigError ===

/// Errors raised while building the server configuration at startup.
///
/// All variants are fatal: the server refuses to start.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `SQLITE_PATH` was not provided by any configuration source.
    #[error("Configuration error: SQLITE_PATH is not set")]
    MissingDatabasePath,
    /// The configured history database does not exist on disk.
    #[error("Configuration error: history database not found at {}", .0.display())]
    DatabaseNotFound(PathBuf),
    /// A configuration source could not be read or extracted.
    #[error("Configuration error: {0}")]
    Invalid(String),
    /// The outbound HTTP client could not be constructed.
    #[error("Configuration error: HTTP client setup failed: {0}")]
    HttpClient(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

// === HistoryError ===

/// Errors related to reading the browser history store.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The history database file is missing.
    #[error("History database not found: {}", .0.display())]
    DatabaseNotFound(PathBuf),
    /// SQLite failed to open or query the store (locked, malformed, wrong schema).
    #[error("History database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),
}

// === FetchError ===

/// A single page fetch that did not produce content.
///
/// Never leaves the page fetcher; failed URLs are simply omitted.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Building, sending or reading the request failed.
    #[error("Fetch request error: {0}")]
    Request(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("Fetch status error: HTTP {0}")]
    Status(u16),
}

// === RpcError ===

/// Errors returned to the host as JSON-RPC error objects.
#[derive(Debug, Error)]
pub enum RpcError {
    /// The incoming line was not valid JSON.
    #[error("Parse error: {0}")]
    Parse(String),
    /// The message was JSON but not a JSON-RPC request.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// The method is not part of the protocol surface.
    #[error("Method not found: {0}")]
    MethodNotFound(String),
    /// The method or tool arguments were malformed.
    #[error("Invalid params: {0}")]
    InvalidParams(String),
    /// `tools/call` named a tool that is not registered.
    #[error("Tool not found: {0}")]
    ToolNotFound(String),
    /// Serializing a result failed.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RpcError {
    /// JSON-RPC 2.0 error code for this error.
    pub fn code(&self) -> i64 {
        match self {
            RpcError::Parse(_) => error_codes::PARSE_ERROR,
            RpcError::InvalidRequest(_) => error_codes::INVALID_REQUEST,
            RpcError::MethodNotFound(_) => error_codes::METHOD_NOT_FOUND,
            RpcError::InvalidParams(_) | RpcError::ToolNotFound(_) => {
                error_codes::INVALID_PARAMS
            }
            RpcError::Internal(_) => error_codes::INTERNAL_ERROR,
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        RpcError::Internal(err.to_string())
    }
}
