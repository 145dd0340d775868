//! Read-only SQLite access to a browser history database.
//!
//! Provides the [`Database`] struct that wraps a `rusqlite::Connection`
//! opened with `SQLITE_OPEN_READ_ONLY`. The schema belongs to the browser that
//! populates the file; nothing here creates or migrates tables.

use rusqlite::{Connection, OpenFlags};
use std::path::Path;

use crate::types::errors::HistoryError;

/// Read-only handle on a history database file.
///
/// The connection is closed when the `Database` is dropped.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens an existing SQLite database at `path` without write access.
    ///
    /// # Errors
    /// Returns [`HistoryError::DatabaseNotFound`] if the file does not exist
    /// and [`HistoryError::DatabaseError`] if SQLite refuses to open it.
    pub fn open_read_only<P: AsRef<Path>>(path: P) -> Result<Self, HistoryError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(HistoryError::DatabaseNotFound(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying `rusqlite::Connection`.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
