//! Request DTOs for the notes API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

// == Limits ==
/// Maximum title length in characters
pub const TITLE_MAX_LENGTH: usize = 100;

/// Maximum content length in characters
pub const CONTENT_MAX_LENGTH: usize = 1000;

/// Request body for creating or updating a note.
///
/// Both fields are optional at the serde layer so that a missing field is
/// reported through `validate()` as a 400 with a field-specific message,
/// rather than rejected earlier by the JSON extractor.
#[derive(Debug, Clone, Deserialize)]
pub struct NotePayload {
    /// Note title (required, 1..=100 characters)
    #[serde(default)]
    pub title: Option<String>,
    /// Note body (required, 1..=1000 characters)
    #[serde(default)]
    pub content: Option<String>,
}

/// A payload that passed validation.
#[derive(Debug, Clone)]
pub struct NoteInput {
    pub title: String,
    pub content: String,
}

impl NotePayload {
    /// Validates the request data.
    ///
    /// Returns the extracted fields, or the message to surface as a 400.
    pub fn validate(self) -> std::result::Result<NoteInput, String> {
        let title = match self.title {
            Some(title) if !title.is_empty() => title,
            _ => return Err("Title is required".to_string()),
        };
        if title.chars().count() > TITLE_MAX_LENGTH {
            return Err(format!(
                "Title exceeds maximum length of {} characters",
                TITLE_MAX_LENGTH
            ));
        }

        let content = match self.content {
            Some(content) if !content.is_empty() => content,
            _ => return Err("Content is required".to_string()),
        };
        if content.chars().count() > CONTENT_MAX_LENGTH {
            return Err(format!(
                "Content exceeds maximum length of {} characters",
                CONTENT_MAX_LENGTH
            ));
        }

        Ok(NoteInput { title, content })
    }
}
