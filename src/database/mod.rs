//! history-mcp database layer.
//!
//! Read-only access to the browser's history store.
//!
//! # Usage
//!
//! ```no_run
//! use history_mcp::database::Database;
//!
//! let db = Database::open_read_only("/path/to/History").expect("failed to open history");
//! let conn = db.connection();
//! ```

pub mod connection;

pub use connection::Database;
