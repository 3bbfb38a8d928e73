use super::{SlotError, StorageSlot};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Slot stored as one row of a `kv` table, so several slots can share a
/// database file.
#[derive(Clone)]
pub struct SqliteSlot {
    db_path: Arc<PathBuf>,
    key: String,
}

impl SqliteSlot {
    pub fn open(path: impl AsRef<Path>, key: &str) -> Result<Self, SlotError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "
            PRAGMA journal_mode=WAL;
            PRAGMA synchronous=NORMAL;
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY NOT NULL,
                value BLOB NOT NULL
            );
            ",
        )?;

        Ok(Self {
            db_path: Arc::new(path.to_path_buf()),
            key: key.to_string(),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl StorageSlot for SqliteSlot {
    fn read(&self) -> Result<Option<Vec<u8>>, SlotError> {
        let conn = Connection::open(&*self.db_path)?;
        let value = conn
            .query_row(
                "SELECT value FROM kv WHERE key = ?1",
                params![self.key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), SlotError> {
        let conn = Connection::open(&*self.db_path)?;
        conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![self.key, bytes],
        )?;
        tracing::debug!(key = %self.key, bytes = bytes.len(), "sqlite slot written");
        Ok(())
    }
}
