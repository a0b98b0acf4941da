use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema. Idempotent; safe to run on every
/// open.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS snapshots (
            key        TEXT PRIMARY KEY,
            payload    TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );",
    )?;
    Ok(())
}
