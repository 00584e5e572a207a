//! Notes Repository
//!
//! Async CRUD operations against the notes table. The repository is the
//! authoritative store; the cache in front of it never replaces it.
//!
//! Ids are stored as canonical UUID strings and timestamps as fixed-width
//! RFC 3339 UTC strings (microsecond precision), so lexicographic ordering on
//! `created_at` is chronological.

use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::Note;

const NOTE_COLUMNS: &str = "id, title, content, created_at, updated_at";

// == Row Mapping ==
#[derive(Debug, sqlx::FromRow)]
struct NoteRow {
    id: String,
    title: String,
    content: String,
    created_at: String,
    updated_at: String,
}

impl TryFrom<NoteRow> for Note {
    type Error = ApiError;

    fn try_from(row: NoteRow) -> Result<Self> {
        Ok(Note {
            id: Uuid::parse_str(&row.id)
                .map_err(|e| ApiError::Internal(format!("corrupt note id '{}': {}", row.id, e)))?,
            title: row.title,
            content: row.content,
            created_at: parse_timestamp(&row.created_at)?,
            updated_at: parse_timestamp(&row.updated_at)?,
        })
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ApiError::Internal(format!("corrupt timestamp '{raw}': {e}")))
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

// == Notes Repository ==
/// Pool-backed repository for notes.
#[derive(Debug, Clone)]
pub struct NotesRepository {
    pool: SqlitePool,
}

impl NotesRepository {
    // == Constructor ==
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // == List All ==
    /// Returns every note, newest first.
    pub async fn list_all(&self) -> Result<Vec<Note>> {
        let rows = sqlx::query_as::<_, NoteRow>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Note::try_from).collect()
    }

    // == Find By Id ==
    /// Returns the note with the given id, if any.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "SELECT {NOTE_COLUMNS} FROM notes WHERE id = ?"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Note::try_from).transpose()
    }

    // == Find Duplicate ==
    /// True when a note with identical title and content already exists.
    /// Application-level uniqueness backing the 409 path.
    pub async fn find_duplicate(&self, title: &str, content: &str) -> Result<bool> {
        let hit: Option<i64> =
            sqlx::query_scalar("SELECT 1 FROM notes WHERE title = ? AND content = ? LIMIT 1")
                .bind(title)
                .bind(content)
                .fetch_optional(&self.pool)
                .await?;

        Ok(hit.is_some())
    }

    // == Insert ==
    /// Stores a freshly stamped note and returns it.
    pub async fn insert(&self, title: &str, content: &str) -> Result<Note> {
        let note = Note::new(title, content);

        sqlx::query(
            "INSERT INTO notes (id, title, content, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(note.id.to_string())
        .bind(&note.title)
        .bind(&note.content)
        .bind(format_timestamp(&note.created_at))
        .bind(format_timestamp(&note.updated_at))
        .execute(&self.pool)
        .await?;

        Ok(note)
    }

    // == Update ==
    /// Rewrites title and content, refreshing `updated_at`.
    ///
    /// Returns the updated note, or `None` when no note has this id.
    pub async fn update(&self, id: Uuid, title: &str, content: &str) -> Result<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "UPDATE notes SET title = ?, content = ?, updated_at = ? \
             WHERE id = ? RETURNING {NOTE_COLUMNS}"
        ))
        .bind(title)
        .bind(content)
        .bind(format_timestamp(&Note::stamp()))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Note::try_from).transpose()
    }

    // == Delete ==
    /// Removes the note and returns the deleted record, or `None` when absent.
    pub async fn delete(&self, id: Uuid) -> Result<Option<Note>> {
        let row = sqlx::query_as::<_, NoteRow>(&format!(
            "DELETE FROM notes WHERE id = ? RETURNING {NOTE_COLUMNS}"
        ))
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Note::try_from).transpose()
    }
}
