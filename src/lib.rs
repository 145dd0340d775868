//! history-mcp — an MCP tool server over a browser history database.
//!
//! Exposes two tools to an agent host on stdio: `read_history`, listing the
//! most recently visited pages, and `search_page`, fetching the raw text of a
//! list of URLs. This library crate exposes all modules for use by the binary
//! and integration tests.

pub mod app;
pub mod database;
pub mod managers;
pub mod rpc_handler;
pub mod services;
pub mod tools;
pub mod types;
