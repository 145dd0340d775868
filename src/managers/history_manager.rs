//! History Manager for history-mcp.
//!
//! Implements `HistoryManagerTrait`: reading the most recently visited pages
//! from a browser history store, backed by SQLite via `rusqlite`.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::database::Database;
use crate::types::errors::HistoryError;
use crate::types::history::HistoryEntry;

/// Maximum number of entries returned by a single read.
pub const HISTORY_LIMIT: usize = 100;

const RECENT_HISTORY_SQL: &str =
    "SELECT url, title FROM urls ORDER BY last_visit_time DESC LIMIT ?1";

/// Trait defining history read operations.
pub trait HistoryManagerTrait {
    fn read_history(&self) -> Result<Vec<HistoryEntry>, HistoryError>;
}

/// History reader bound to one database path.
///
/// Holds no connection between calls: each read opens the file read-only,
/// queries, and closes it again.
pub struct HistoryManager {
    db_path: PathBuf,
}

impl HistoryManager {
    /// Creates a new `HistoryManager` for the database at `db_path`.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<HistoryEntry> {
        let url: String = row.get(0)?;
        let title: Option<String> = row.get(1)?;
        Ok(HistoryEntry {
            title: title.unwrap_or_default(),
            url,
        })
    }
}

impl HistoryManagerTrait for HistoryManager {
    /// Returns up to [`HISTORY_LIMIT`] entries, most recently visited first.
    fn read_history(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let db = Database::open_read_only(&self.db_path)?;
        let mut stmt = db.connection().prepare(RECENT_HISTORY_SQL)?;

        let rows = stmt.query_map([HISTORY_LIMIT as i64], Self::row_to_entry)?;

        let mut results = Vec::with_capacity(HISTORY_LIMIT);
        for row in rows {
            results.push(row?);
        }

        debug!(count = results.len(), path = %self.db_path.display(), "read history");
        Ok(results)
    }
}
