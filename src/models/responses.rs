//! Response DTOs for the notes API
//!
//! Defines the structure of outgoing HTTP response bodies. Read responses
//! carry a `fromCache` flag so clients (and tests) can observe whether the
//! read was served by the cache or the backing store.

use serde::Serialize;

use crate::models::Note;

/// Response body for `GET /v1/api/notes`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteListResponse {
    /// Status message
    pub message: String,
    /// All notes, newest first
    pub data: Vec<Note>,
    /// True when served from the cache
    pub from_cache: bool,
}

impl NoteListResponse {
    /// List served from the cache.
    pub fn cached(data: Vec<Note>) -> Self {
        Self {
            message: "OK".to_string(),
            data,
            from_cache: true,
        }
    }

    /// List served from the backing store.
    pub fn fresh(data: Vec<Note>) -> Self {
        Self {
            message: "OK".to_string(),
            data,
            from_cache: false,
        }
    }
}

/// Response body for `GET /v1/api/notes/:id`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDetailResponse {
    /// Status message
    pub message: String,
    /// The requested note
    pub data: Note,
    /// True when served from the cache
    pub from_cache: bool,
}

impl NoteDetailResponse {
    /// Note served from the cache.
    pub fn cached(data: Note) -> Self {
        Self {
            message: "OK".to_string(),
            data,
            from_cache: true,
        }
    }

    /// Note served from the backing store.
    pub fn fresh(data: Note) -> Self {
        Self {
            message: "OK".to_string(),
            data,
            from_cache: false,
        }
    }
}

/// Response body for create, update and delete
#[derive(Debug, Clone, Serialize)]
pub struct NoteMutationResponse {
    /// Status message
    pub message: String,
    /// The affected note
    pub data: Note,
}

impl NoteMutationResponse {
    /// Response for a created note (201).
    pub fn created(data: Note) -> Self {
        Self {
            message: "Created".to_string(),
            data,
        }
    }

    /// Response for an updated note.
    pub fn updated(data: Note) -> Self {
        Self {
            message: "OK".to_string(),
            data,
        }
    }

    /// Response for a deleted note; `data` is the record that was removed.
    pub fn deleted(data: Note) -> Self {
        Self {
            message: "OK".to_string(),
            data,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
///
/// `error` is omitted from the JSON when there is no detail beyond the
/// status message (404 and 429 bodies carry only `message`).
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Status message
    pub message: String,
    /// Detail describing what went wrong
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Creates an ErrorResponse with only a status message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: None,
        }
    }

    /// Creates an ErrorResponse with a detail string.
    pub fn with_detail(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(error.into()),
        }
    }
}
