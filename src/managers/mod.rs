// history-mcp managers
// Managers own access to external state the server reads from.

pub mod history_manager;
