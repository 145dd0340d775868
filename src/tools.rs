//! Tool registration for history-mcp.
//!
//! Maps each operation to the name, description and input schema the host
//! sees, and forwards `tools/call` arguments to it unchanged.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::app::App;
use crate::managers::history_manager::HistoryManagerTrait;
use crate::services::page_fetcher::PageFetcherTrait;
use crate::types::errors::RpcError;
use crate::types::protocol::{CallToolResult, ToolInfo};

pub const READ_HISTORY: &str = "read_history";
pub const SEARCH_PAGE: &str = "search_page";

#[derive(Debug, Deserialize)]
struct SearchPageArgs {
    urls: Vec<String>,
}

/// Every tool the server exposes, in registration order.
pub fn definitions() -> Vec<ToolInfo> {
    vec![
        ToolInfo {
            name: READ_HISTORY.to_string(),
            description: "Read last lines of the history. Returns a list of up to 100 recently \
                          visited pages, most recent first, each with a \"title\" and a \"url\"."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {},
            }),
        },
        ToolInfo {
            name: SEARCH_PAGE.to_string(),
            description: "Get the content of the web page. Takes a list of URLs and returns an \
                          object mapping each successfully fetched URL to its raw text content."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "urls": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "URLs to fetch",
                    },
                },
                "required": ["urls"],
            }),
        },
    ]
}

/// Runs the named tool against `app`.
///
/// Unknown tools and malformed arguments are protocol errors. A failing
/// history read is a tool failure, reported with `is_error` set.
pub fn call_tool(app: &App, name: &str, arguments: &Value) -> Result<CallToolResult, RpcError> {
    info!(tool = %name, "tool call");
    match name {
        READ_HISTORY => {
            if !(arguments.is_null() || arguments.is_object()) {
                return Err(RpcError::InvalidParams(
                    "read_history takes no arguments".to_string(),
                ));
            }
            match app.history_manager.read_history() {
                Ok(entries) => Ok(CallToolResult::text(serde_json::to_string(&entries)?)),
                Err(e) => {
                    warn!(error = %e, "read_history failed");
                    Ok(CallToolResult::failure(e.to_string()))
                }
            }
        }
        SEARCH_PAGE => {
            let args: SearchPageArgs = serde_json::from_value(arguments.clone())
                .map_err(|e| RpcError::InvalidParams(format!("search_page: {}", e)))?;
            let pages = app.page_fetcher.fetch_pages(&args.urls);
            Ok(CallToolResult::text(serde_json::to_string(&pages)?))
        }
        other => Err(RpcError::ToolNotFound(other.to_string())),
    }
}
