//! Database Connection Module
//!
//! Builds the SQLite connection pool and applies the schema at startup.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};

// == Schema ==
const CREATE_NOTES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id         TEXT PRIMARY KEY,
    title      TEXT NOT NULL,
    content    TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
"#;

// Newest-first listing is the hot path
const CREATE_CREATED_AT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_notes_created_at ON notes (created_at DESC)";

// == Connect ==
/// Creates the SQLite connection pool.
///
/// WAL journal mode for concurrent readers, foreign keys enabled, a busy
/// timeout to ride out lock contention, and `create_if_missing` so a fresh
/// deployment starts from an empty database file.
///
/// # Arguments
/// * `database_url` - SQLite URL (e.g. "sqlite:notes.db" or "sqlite::memory:")
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("invalid database URL")?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .context("failed to connect to the database")?;

    Ok(pool)
}

// == Init Schema ==
/// Applies the notes schema. Idempotent; runs at every startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_NOTES_TABLE)
        .execute(pool)
        .await
        .context("failed to create notes table")?;

    sqlx::query(CREATE_CREATED_AT_INDEX)
        .execute(pool)
        .await
        .context("failed to create created_at index")?;

    Ok(())
}
