//! Note domain type
//!
//! The persisted entity and the payload shapes the cache stores for it.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Note ==
/// A single note as stored and served.
///
/// Serializes in camelCase, so the wire form is
/// `{id, title, content, createdAt, updatedAt}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Note identifier
    pub id: Uuid,
    /// Note title
    pub title: String,
    /// Note body
    pub content: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a freshly stamped note with a new random id.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Self::stamp();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The current time at the precision the store keeps (microseconds), so
    /// in-memory values compare equal to their persisted round-trip.
    pub fn stamp() -> DateTime<Utc> {
        Utc::now().trunc_subsecs(6)
    }
}

// == Cached Payloads ==
/// What the notes service stores in the TTL cache.
///
/// `"notes:all"` holds a `List`, `"notes:<id>"` a `Single`. A variant mismatch
/// on a hit is treated as a cache miss by the handlers.
#[derive(Debug, Clone)]
pub enum CachedNotes {
    /// The full collection, newest first
    List(Vec<Note>),
    /// One note, keyed by id
    Single(Note),
}
