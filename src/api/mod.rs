//! API Module
//!
//! HTTP handlers and routing for the notes REST API.
//!
//! # Endpoints
//! - `GET /v1/api/notes` - List all notes (cached)
//! - `GET /v1/api/notes/:id` - Fetch a single note (cached)
//! - `POST /v1/api/notes` - Create a note
//! - `PUT /v1/api/notes/:id` - Update a note
//! - `DELETE /v1/api/notes/:id` - Delete a note
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
