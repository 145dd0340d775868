//! RPC method handler for the history-mcp stdio protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested without a
//! process. `handle_line` turns one incoming line into at most one response;
//! `handle_method` dispatches a request to the protocol handlers and tools.

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::app::App;
use crate::tools;
use crate::types::errors::RpcError;
use crate::types::protocol::{
    negotiate_protocol_version, CallToolParams, InitializeResult, JsonRpcMessage,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
};

/// Handles one newline-delimited message.
///
/// Returns `None` for notifications, which never get a response.
pub fn handle_line(app: &App, line: &str) -> Option<JsonRpcResponse> {
    let raw: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "failed to parse message");
            return Some(error_response(Value::Null, RpcError::Parse(e.to_string())));
        }
    };

    // An absent id marks a notification; a null id is not a valid request id.
    let id = raw.get("id").cloned();
    let message: JsonRpcMessage = match serde_json::from_value(raw) {
        Ok(m) => m,
        Err(e) => {
            warn!(error = %e, "not a JSON-RPC message");
            let id = id.unwrap_or(Value::Null);
            return Some(error_response(id, RpcError::InvalidRequest(e.to_string())));
        }
    };

    let id = match id {
        None => {
            handle_notification(&message.method);
            return None;
        }
        Some(Value::Null) => {
            return Some(error_response(
                Value::Null,
                RpcError::InvalidRequest("request id must not be null".to_string()),
            ));
        }
        Some(id) => id,
    };

    let params = message.params.unwrap_or(Value::Null);
    let response = match handle_method(app, &message.method, &params) {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(err) => error_response(id, err),
    };
    Some(response)
}

/// Dispatch a request to the matching protocol handler.
pub fn handle_method(app: &App, method: &str, params: &Value) -> Result<Value, RpcError> {
    match method {
        "initialize" => {
            let requested = params.get("protocolVersion").and_then(|v| v.as_str());
            let result = InitializeResult {
                protocol_version: negotiate_protocol_version(requested).to_string(),
                capabilities: ServerCapabilities {
                    tools: Some(ToolsCapability { list_changed: false }),
                },
                server_info: ServerInfo {
                    name: app.config.server_name.clone(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
            };
            info!(protocol = %result.protocol_version, "initialized");
            Ok(serde_json::to_value(result)?)
        }
        "ping" => Ok(json!({})),
        "tools/list" => Ok(serde_json::to_value(ListToolsResult {
            tools: tools::definitions(),
        })?),
        "tools/call" => {
            let call: CallToolParams = serde_json::from_value(params.clone())
                .map_err(|e| RpcError::InvalidParams(e.to_string()))?;
            let result = tools::call_tool(app, &call.name, &call.arguments)?;
            Ok(serde_json::to_value(result)?)
        }
        "resources/list" => Ok(json!({"resources": []})),
        "resources/templates/list" => Ok(json!({"resourceTemplates": []})),
        "prompts/list" => Ok(json!({"prompts": []})),
        other => Err(RpcError::MethodNotFound(other.to_string())),
    }
}

fn handle_notification(method: &str) {
    match method {
        "notifications/initialized" => info!("client confirmed initialization"),
        "notifications/cancelled" => debug!("client cancelled a request"),
        other => debug!(method = %other, "ignoring notification"),
    }
}

fn error_response(id: Value, err: RpcError) -> JsonRpcResponse {
    JsonRpcResponse::error(id, err.code(), err.to_string())
}
