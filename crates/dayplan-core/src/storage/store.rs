//! SQLite-backed blob store for the application day state.
//!
//! Persistence is an explicit load-at-startup/save-on-mutation pair: the
//! whole [`DayState`] is serialized as one JSON blob under a fixed key
//! with a schema version. A blob saved under a different schema version
//! is discarded on load rather than migrated.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use super::data_dir;
use crate::day::DayState;
use crate::error::StorageError;

/// Key the day state is stored under.
pub const STORAGE_KEY: &str = "dayplan_day_v1";

/// Version stamped onto saved blobs.
pub const SCHEMA_VERSION: i32 = 1;

/// SQLite store for day-state blobs.
pub struct DayStore {
    conn: Connection,
}

impl DayStore {
    /// Open the store at `~/.config/dayplan/dayplan.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    pub fn open() -> Result<Self, StorageError> {
        Self::open_at(data_dir()?.join("dayplan.db"))
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StorageError::OpenFailed {
            path: PathBuf::from(path),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store (for tests).
    pub fn open_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|source| StorageError::OpenFailed {
            path: PathBuf::from(":memory:"),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS app_state (
                key      TEXT PRIMARY KEY,
                version  INTEGER NOT NULL,
                data     TEXT NOT NULL,
                saved_at TEXT NOT NULL
            );",
        )
    }

    /// Load the persisted day state.
    ///
    /// Returns `Ok(None)` when nothing was saved yet, or when the stored
    /// blob carries a different schema version (the stale blob is logged
    /// and ignored, not migrated).
    pub fn load_day(&self) -> Result<Option<DayState>, StorageError> {
        let row: Option<(i32, String)> = self
            .conn
            .query_row(
                "SELECT version, data FROM app_state WHERE key = ?1",
                params![STORAGE_KEY],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;

        let Some((version, data)) = row else {
            return Ok(None);
        };

        if version != SCHEMA_VERSION {
            tracing::warn!(found = version, expected = SCHEMA_VERSION,
                "discarding day state with mismatched schema version");
            return Ok(None);
        }

        let state = serde_json::from_str(&data).map_err(|e| StorageError::Corrupt {
            key: STORAGE_KEY.to_string(),
            message: e.to_string(),
        })?;
        Ok(Some(state))
    }

    /// Persist the day state, replacing any previous blob.
    pub fn save_day(&self, state: &DayState) -> Result<(), StorageError> {
        let data = serde_json::to_string(state).map_err(|e| StorageError::Corrupt {
            key: STORAGE_KEY.to_string(),
            message: e.to_string(),
        })?;
        self.conn.execute(
            "INSERT INTO app_state (key, version, data, saved_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(key) DO UPDATE SET
                 version = excluded.version,
                 data = excluded.data,
                 saved_at = excluded.saved_at",
            params![
                STORAGE_KEY,
                SCHEMA_VERSION,
                data,
                Utc::now().to_rfc3339()
            ],
        )?;
        Ok(())
    }
}
