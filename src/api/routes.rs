//! API Routes
//!
//! Configures the Axum router with all notes endpoints.

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_note, delete_note, get_note, health_handler, list_notes, update_note, AppState,
};
use crate::ratelimit::rate_limit;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /v1/api/notes` - List all notes, newest first
/// - `GET /v1/api/notes/:id` - Fetch a single note
/// - `POST /v1/api/notes` - Create a note
/// - `PUT /v1/api/notes/:id` - Update a note
/// - `DELETE /v1/api/notes/:id` - Delete a note
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - Rate limiting on the notes routes (GET/POST only; the middleware lets
///   PUT/DELETE through, and /health is registered outside the layer)
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/v1/api/notes", get(list_notes).post(create_note))
        .route(
            "/v1/api/notes/:id",
            get(get_note).put(update_note).delete(delete_note),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), rate_limit))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
