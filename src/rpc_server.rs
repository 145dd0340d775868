//! history-mcp server: MCP over stdin/stdout.
//!
//! Protocol: one JSON-RPC 2.0 message per line (newline-delimited JSON).
//! Request:  {"jsonrpc":"2.0","id":1,"method":"tools/call","params":{"name":"read_history"}}
//! Response: {"jsonrpc":"2.0","id":1,"result":{...}} or {"jsonrpc":"2.0","id":1,"error":{...}}
//!
//! Logs go to stderr; stdout carries protocol frames only.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use history_mcp::app::App;
use history_mcp::rpc_handler::handle_line;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let app = match App::from_env() {
        Ok(app) => app,
        Err(e) => {
            error!(error = %e, "refusing to start");
            return ExitCode::FAILURE;
        }
    };

    info!(
        server = %app.config.server_name,
        history = %app.history_manager.db_path().display(),
        "history-mcp ready"
    );

    match serve(&app) {
        Ok(()) => {
            info!("stdin closed, shutting down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "transport failure");
            ExitCode::FAILURE
        }
    }
}

fn serve(app: &App) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        if let Some(response) = handle_line(app, &line) {
            let frame = serde_json::to_string(&response).map_err(io::Error::other)?;
            writeln!(stdout, "{}", frame)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
