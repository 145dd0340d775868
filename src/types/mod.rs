// history-mcp shared type definitions
// Each submodule defines types used across the server.

pub mod errors;
pub mod history;
pub mod page;
pub mod protocol;
pub mod settings;
