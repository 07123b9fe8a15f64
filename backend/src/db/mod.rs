//! # Persistence Adapter
//!
//! Owns the single SQLite connection used by every handler. A `Store` is
//! opened once in `main.rs`, migrated, and handed to the Actix application
//! inside `AppState`; handlers never open connections of their own.
//!
//! The connection sits behind an `Arc<Mutex<_>>` so the handle can be cloned
//! into each worker. Queries run on the Tokio blocking pool through
//! `Store::run`, keeping rusqlite's synchronous calls off the async runtime.
//!
//! ## Tables
//! - `AuditReports`: one row per submitted walkthrough (`Id`, `UserEmail`,
//!   `Timestamp`, `ReportData`). Append-only.
//! - `Incidents`: one row per problematic rack of a walkthrough. No foreign
//!   key to `AuditReports`.
//!
//! Timestamps are stored as RFC 3339 UTC strings with microsecond precision,
//! so ordering by the text column is chronological.

mod incidents;
mod reports;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::Connection;
use std::path::Path;
use std::sync::{Arc, Mutex};
use thiserror::Error;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS AuditReports (
    Id TEXT PRIMARY KEY,
    UserEmail TEXT NOT NULL,
    Timestamp TEXT NOT NULL,
    ReportData TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS IX_AuditReports_Timestamp ON AuditReports (Timestamp DESC);

CREATE TABLE IF NOT EXISTS Incidents (
    Id TEXT PRIMARY KEY,
    Location TEXT NOT NULL,
    DataHall TEXT NOT NULL,
    Description TEXT NOT NULL,
    Severity TEXT NOT NULL,
    Status TEXT NOT NULL,
    UserEmail TEXT NOT NULL,
    CreatedAt TEXT NOT NULL,
    UpdatedAt TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS IX_Incidents_CreatedAt ON Incidents (CreatedAt DESC);
"#;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The query matched no row.
    #[error("record not found")]
    NotFound,
    #[error("{0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("invalid stored payload: {0}")]
    Payload(#[from] serde_json::Error),
    #[error("invalid stored timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),
    #[error("invalid stored value: {0}")]
    Corrupt(String),
    #[error("cannot prepare database path: {0}")]
    Io(#[from] std::io::Error),
    #[error("database connection is poisoned")]
    Poisoned,
    #[error("database task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Shared handle to the walkthrough database.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Opens (creating if needed) the database at `path` and runs migrations.
    ///
    /// `":memory:"` opens a private in-memory database.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        let conn = if path == ":memory:" {
            Connection::open_in_memory()?
        } else {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            Connection::open(path)?
        };
        let store = Self {
            conn: Arc::new(Mutex::new(conn)),
        };
        store.with_conn(|conn| Ok(conn.execute_batch(SCHEMA)?))?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::open(":memory:")
    }

    /// Runs `f` against the connection on the calling thread.
    pub fn with_conn<T>(
        &self,
        f: impl FnOnce(&mut Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let mut conn = self.conn.lock().map_err(|_| StoreError::Poisoned)?;
        f(&mut conn)
    }

    /// Runs `f` against the connection on the blocking thread pool.
    async fn run<T, F>(&self, f: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Connection) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.with_conn(f)).await?
    }
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_sort_lexically() {
        let early = Utc.with_ymd_and_hms(2024, 5, 1, 9, 59, 59).unwrap();
        let late = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        assert!(format_timestamp(&early) < format_timestamp(&late));
        assert_eq!(parse_timestamp(&format_timestamp(&late)).unwrap(), late);
    }

    #[test]
    fn file_database_is_created_with_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("walkthrough.sqlite");
        let store = Store::open(path.to_str().unwrap()).unwrap();
        assert!(path.exists());

        let tables: i64 = store
            .with_conn(|conn| {
                Ok(conn.query_row(
                    "SELECT COUNT(*) FROM sqlite_master
                     WHERE type = 'table' AND name IN ('AuditReports', 'Incidents')",
                    [],
                    |row| row.get(0),
                )?)
            })
            .unwrap();
        assert_eq!(tables, 2);
    }

    #[test]
    fn reopening_keeps_the_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("walkthrough.sqlite");
        Store::open(path.to_str().unwrap()).unwrap();
        assert!(Store::open(path.to_str().unwrap()).is_ok());
    }
}
