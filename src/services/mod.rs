// history-mcp services
// Services provide the server's outward-facing functionality: configuration and page fetching.

pub mod config_loader;
pub mod page_fetcher;
