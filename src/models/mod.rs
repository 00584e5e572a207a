//! Domain and wire models for the notes service
//!
//! This module defines the `Note` entity, the cache payload shapes, and the
//! DTOs used for serializing/deserializing HTTP request and response bodies.

pub mod note;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use note::{CachedNotes, Note};
pub use requests::{NoteInput, NotePayload, CONTENT_MAX_LENGTH, TITLE_MAX_LENGTH};
pub use responses::{
    ErrorResponse, HealthResponse, NoteDetailResponse, NoteListResponse, NoteMutationResponse,
};
