//! SQLite-backed key-value slot for the event snapshot.
//!
//! One row per key; the whole snapshot is a single JSON payload, read
//! and written atomically from the caller's perspective.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::SnapshotSlot;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

/// Key under which the event list snapshot is stored.
pub const EVENTS_KEY: &str = "events";

pub struct DbSlot {
    pool: DbPool,
    key: String,
}

impl DbSlot {
    /// Open the database at `path` and bind to the events key. Creates
    /// the schema on first use.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self {
            pool,
            key: EVENTS_KEY.to_string(),
        })
    }
}

impl SnapshotSlot for DbSlot {
    fn set(&mut self, payload: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO snapshots (key, payload, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                 payload = excluded.payload,
                 updated_at = excluded.updated_at",
            params![self.key, payload, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn get(&self) -> AppResult<Option<String>> {
        let payload = self
            .pool
            .conn
            .query_row(
                "SELECT payload FROM snapshots WHERE key = ?1",
                params![self.key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn clear(&mut self) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM snapshots WHERE key = ?1", params![self.key])?;
        Ok(())
    }
}
